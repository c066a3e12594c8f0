use clap::{Parser, ValueEnum};
use podpiskilib::{
    aggregate,
    error::{PodpiskiError, Result},
    formats::{csv::Csv, json::Json},
    model::Subscription,
    money::format_price,
    notify::{self, BillingEvent, EventKind},
    traits::{Notifier, ReadSnapshot},
};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Report {
    /// сумма списаний за месяц
    Total,
    /// ближайшее списание
    Next,
    /// календарь списаний месяца
    Calendar,
    /// кого уведомить сегодня
    Notify,
}

#[derive(Parser, Debug)]
#[command(name="podpiski", version, about="Трекер регулярных подписок")]
struct Cli {
    /// Файл со снапшотом подписок (по умолчанию stdin)
    #[arg(short='i', long="input")]
    input: Option<String>,

    /// Формат снапшота
    #[arg(long="format", value_enum, default_value="csv")]
    format: Fmt,

    /// Отчёт
    #[arg(long="report", value_enum)]
    report: Report,

    /// Опорная дата YYYY-MM-DD (по умолчанию сегодня)
    #[arg(long="date")]
    date: Option<NaiveDate>,

    /// Месяц YYYY-MM для total/calendar (по умолчанию месяц опорной даты)
    #[arg(long="month")]
    month: Option<String>,
}

/// Доставка в stdout — сюда же смотрит бот, формат сообщений его.
struct ConsoleNotifier<'a> {
    by_id: HashMap<i64, &'a Subscription>,
}

impl Notifier for ConsoleNotifier<'_> {
    fn notify(&mut self, event: &BillingEvent) -> Result<()> {
        let Some(sub) = self.by_id.get(&event.subscription_id) else {
            warn!(id = event.subscription_id, "событие по неизвестной подписке");
            return Ok(());
        };
        let price = format_price(sub.price, &sub.currency);
        match event.kind {
            EventKind::Reminder => {
                println!(
                    "🔔 Напоминание о подписке\n\n📌 {}\n💰 {}\n⏰ Списание через {} {}\n",
                    sub.name,
                    price,
                    event.days_left,
                    days_word(event.days_left)
                );
            }
            EventKind::SameDay => {
                println!("💳 Сегодня день списания!\n\n📌 {}\n💰 {}\n", sub.name, price);
            }
        }
        Ok(())
    }
}

fn days_word(days: i64) -> &'static str {
    if days % 10 == 1 && days % 100 != 11 {
        "день"
    } else if (2..=4).contains(&(days % 10)) && !(12..=14).contains(&(days % 100)) {
        "дня"
    } else {
        "дней"
    }
}

fn days_text(days: i64) -> String {
    match days {
        0 => "Сегодня".into(),
        1 => "Завтра".into(),
        n => format!("Через {} {}", n, days_word(n)),
    }
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|e| PodpiskiError::Parse(format!("month: {e}")))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let subs = match cli.format {
        Fmt::Csv => Csv::read(br),
        Fmt::Json => Json::read(br),
    }?;
    info!(count = subs.len(), "снапшот загружен");

    // «сейчас» берётся один раз на границе; ядро видит только явную дату
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let month = match &cli.month {
        Some(m) => parse_month(m)?,
        None => today.with_day(1).unwrap_or(today),
    };

    match cli.report {
        Report::Total => {
            let total = aggregate::monthly_total(&subs, month)?;
            println!("Всего за месяц: {}", format_price(total, "RUB"));
        }
        Report::Next => match aggregate::next_billing_group(&subs, today)? {
            Some(group) => {
                println!("Ближайшее списание — {}", days_text(group.days_left));
                for sub in &group.subscriptions {
                    println!("  {} — {}", sub.name, format_price(sub.price, &sub.currency));
                }
                println!("Итого: {}", format_price(group.total_amount, "RUB"));
            }
            None => println!("Будущих списаний нет"),
        },
        Report::Calendar => {
            let mut occurrences = aggregate::calendar_occurrences(&subs, month)?;
            occurrences.sort_by_key(|o| (o.date, o.subscription_id));
            let by_id: HashMap<i64, &Subscription> = subs.iter().map(|s| (s.id, s)).collect();
            for occ in &occurrences {
                let name = by_id.get(&occ.subscription_id).map_or("?", |s| s.name.as_str());
                println!("{}  {}", occ.date.format("%Y-%m-%d"), name);
            }
            if occurrences.is_empty() {
                println!("В {} списаний нет", month.format("%Y-%m"));
            }
        }
        Report::Notify => {
            let mut notifier = ConsoleNotifier {
                by_id: subs.iter().map(|s| (s.id, s)).collect(),
            };
            let fired = notify::run_daily_check(&subs, today, &mut notifier)?;
            if fired == 0 {
                println!("Сегодня уведомлять некого");
            }
        }
    }

    Ok(())
}
