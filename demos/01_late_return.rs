/// late return - loyalty discount and a late fine with a controlled clock
use car_rental_ledger::{Ledger, MostRented, SafeTimeProvider, TimeSource};
use chrono::{Duration, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let mut ledger = Ledger::with_standard_fleet();
    let customer_id = ledger.register_customer("Ravi").id.clone();

    // four short rentals, the fourth one is discounted
    for rental in 1..=4 {
        let outcome = ledger.rent_car("C005", &customer_id, 2, false, &time)?;
        println!("rental {}: {}", rental, outcome);
        ledger.return_car("C005", &time)?;
    }

    // keep the swift three days past its due date
    ledger.rent_car("C005", &customer_id, 2, false, &time)?;
    controller.advance(Duration::days(5));
    println!("\nreturned on {}", time.now().format("%Y-%m-%d"));
    println!("{}", ledger.return_car("C005", &time)?);

    let report = ledger.revenue_report();
    println!("\nrentals: ${}", report.rental_revenue.to_currency_string());
    println!("fines:   ${}", report.fine_revenue.to_currency_string());
    println!("{}", report);

    if let MostRented::Car { car_name, count, .. } = ledger.most_rented_car_all_time() {
        println!("all-time favourite: {} ({} rentals)", car_name, count);
    }

    Ok(())
}
