use podpiskilib::{aggregate, formats::csv::Csv, money::format_price, traits::ReadSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: ближайшее списание по CSV-снапшоту (stdin -> stdout)
    let subs = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let today = chrono::Local::now().date_naive();

    match aggregate::next_billing_group(&subs, today)? {
        Some(group) => println!(
            "через {} дн.: {}",
            group.days_left,
            format_price(group.total_amount, "RUB")
        ),
        None => println!("будущих списаний нет"),
    }
    Ok(())
}
