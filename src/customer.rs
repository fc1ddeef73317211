use serde::{Deserialize, Serialize};

/// a customer and their loyalty count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    rental_count: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rental_count: 0,
        }
    }

    /// rentals ever created for this customer, returned or not
    pub fn rental_count(&self) -> u32 {
        self.rental_count
    }

    pub(crate) fn record_rental(&mut self) -> u32 {
        self.rental_count += 1;
        self.rental_count
    }
}

/// customers in registration order, with sequential ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRoster {
    customers: Vec<Customer>,
}

impl CustomerRoster {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }

    /// register a customer under the next id (CUS1, CUS2, ...)
    pub fn register(&mut self, name: impl Into<String>) -> &Customer {
        let id = format!("CUS{}", self.customers.len() + 1);
        let index = self.customers.len();
        self.customers.push(Customer::new(id, name));
        &self.customers[index]
    }

    pub fn find(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
    }

    /// first customer registered under this name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Customer> {
        let name = name.trim().to_lowercase();
        self.customers.iter().find(|c| c.name.trim().to_lowercase() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut roster = CustomerRoster::new();

        assert_eq!(roster.register("Asha").id, "CUS1");
        assert_eq!(roster.register("Ravi").id, "CUS2");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find("cus2").unwrap().name, "Ravi");
    }

    #[test]
    fn test_find_by_name() {
        let mut roster = CustomerRoster::new();
        roster.register("Asha Mehta");

        assert_eq!(roster.find_by_name("asha mehta").unwrap().id, "CUS1");
        assert!(roster.find_by_name("Ravi").is_none());
    }

    #[test]
    fn test_rental_count_only_grows() {
        let mut roster = CustomerRoster::new();
        roster.register("Asha");

        let customer = roster.find_mut("CUS1").unwrap();
        assert_eq!(customer.record_rental(), 1);
        assert_eq!(customer.record_rental(), 2);
        assert_eq!(roster.find("CUS1").unwrap().rental_count(), 2);
    }
}
