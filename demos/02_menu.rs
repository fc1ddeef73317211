/// menu - the interactive rental desk driven from stdin
use std::io::{self, BufRead, Write};

use car_rental_ledger::{Command, Ledger, SafeTimeProvider, TimeSource};

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    lines.next().transpose().map(|line| line.map(|l| l.trim().to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let time = SafeTimeProvider::new(TimeSource::System);
    let mut ledger = Ledger::with_standard_fleet();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n===== Car Rental System =====");
        println!("1. Rent a Car");
        println!("2. Return a Car");
        println!("3. View Revenue Report");
        println!("4. View Active Rentals");
        println!("5. View Most Rented Car");
        println!("6. Exit");

        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            break;
        };

        let command = match choice.as_str() {
            "1" => {
                let Some(customer_name) = prompt(&mut lines, "Enter your name: ")? else { break };

                println!("\nAvailable Cars:");
                for car in ledger.catalogue().available_cars() {
                    println!("{}: {} ({})", car.id, car.display_name(), car.category);
                }

                let Some(car_id) = prompt(&mut lines, "\nEnter Car ID: ")? else { break };
                let Some(days) = prompt(&mut lines, "Enter rental days: ")? else { break };
                let days = match days.parse::<u32>() {
                    Ok(days) if days > 0 => days,
                    _ => {
                        println!("Invalid number of days.");
                        continue;
                    }
                };
                let Some(insurance) = prompt(&mut lines, "Add Insurance for 200/day? (Y/N): ")? else { break };

                Command::RentCar {
                    customer_name,
                    car_id,
                    days,
                    insurance: insurance.eq_ignore_ascii_case("y"),
                }
            }
            "2" => {
                let Some(car_id) = prompt(&mut lines, "Enter Car ID to return: ")? else { break };
                Command::ReturnCar { car_id }
            }
            "3" => Command::RevenueReport,
            "4" => Command::ActiveRentals,
            "5" => Command::MostRentedCar,
            "6" => Command::Exit,
            _ => {
                println!("Invalid choice. Try again.");
                continue;
            }
        };

        match ledger.execute(command, &time) {
            Ok(outcome) => {
                println!("\n{}", outcome);
                if outcome.is_exit() {
                    break;
                }
            }
            Err(e) => println!("\n{}", e),
        }
    }

    Ok(())
}
