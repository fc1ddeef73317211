/// quick start - rent and return a car from the standard fleet
use car_rental_ledger::{Ledger, SafeTimeProvider, TimeSource};
use chrono::{TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));

    let mut ledger = Ledger::with_standard_fleet();
    let customer_id = ledger.register_customer("Asha").id.clone();

    // two days in the camry with insurance
    let rented = ledger.rent_car("C001", &customer_id, 2, true, &time)?;
    println!("{}", rented);

    let returned = ledger.return_car("C001", &time)?;
    println!("{}", returned);

    println!("{}", ledger.revenue_report());
    println!("{}", ledger.json());

    Ok(())
}
