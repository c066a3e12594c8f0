use chrono::NaiveDate;
use podpiskilib::{
    error::Result,
    model::Subscription,
    notify::{due_events, run_daily_check, BillingEvent, EventKind},
    traits::Notifier,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sub(id: i64, created: NaiveDate, billing_day: u32, notify_days_before: u32) -> Subscription {
    Subscription {
        id,
        name: "Кино".into(),
        price: 29900,
        currency: "RUB".into(),
        billing_day,
        period_months: 1,
        category: None,
        is_active: true,
        auto_renewal: true,
        notify_days_before,
        created_at: created,
    }
}

#[derive(Default)]
struct Collector {
    events: Vec<BillingEvent>,
}

impl Notifier for Collector {
    fn notify(&mut self, event: &BillingEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

#[test]
fn reminder_fires_at_lead_time() {
    let s = sub(1, d(2024, 1, 15), 15, 3);
    let events = due_events(&[s], d(2024, 3, 12)).expect("events");
    assert_eq!(
        events,
        vec![BillingEvent {
            subscription_id: 1,
            kind: EventKind::Reminder,
            days_left: 3,
        }]
    );
}

#[test]
fn nothing_fires_between_reminder_and_billing() {
    let s = sub(1, d(2024, 1, 15), 15, 3);
    assert!(due_events(&[s.clone()], d(2024, 3, 13)).expect("events").is_empty());
    assert!(due_events(&[s], d(2024, 3, 10)).expect("events").is_empty());
}

#[test]
fn same_day_with_zero_lead_emits_exactly_one_event() {
    // notify_days_before == 0: напоминание и день списания совпадают
    let s = sub(1, d(2024, 1, 15), 15, 0);
    let events = due_events(&[s], d(2024, 3, 15)).expect("events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::SameDay);
    assert_eq!(events[0].days_left, 0);
}

#[test]
fn same_day_fires_even_with_nonzero_lead() {
    let s = sub(1, d(2024, 1, 15), 15, 3);
    let events = due_events(&[s], d(2024, 3, 15)).expect("events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::SameDay);
}

#[test]
fn two_subscriptions_one_event_each() {
    // сценарий: одной напоминание за 3 дня, другой — событие дня списания
    let reminder = sub(1, d(2024, 1, 18), 18, 3);
    let charge = sub(2, d(2024, 1, 15), 15, 0);
    let events = due_events(&[reminder, charge], d(2024, 3, 15)).expect("events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].subscription_id, 1);
    assert_eq!(events[0].kind, EventKind::Reminder);
    assert_eq!(events[1].subscription_id, 2);
    assert_eq!(events[1].kind, EventKind::SameDay);
}

#[test]
fn inactive_subscriptions_are_silent() {
    let mut s = sub(1, d(2024, 1, 15), 15, 0);
    s.is_active = false;
    assert!(due_events(&[s], d(2024, 3, 15)).expect("events").is_empty());
}

#[test]
fn daily_check_dispatches_through_notifier() {
    let subs = vec![sub(1, d(2024, 1, 15), 15, 3), sub(2, d(2024, 1, 20), 20, 5)];
    let mut collector = Collector::default();
    let fired = run_daily_check(&subs, d(2024, 3, 12), &mut collector).expect("check");
    assert_eq!(fired, 1);
    assert_eq!(collector.events.len(), 1);
    assert_eq!(collector.events[0].subscription_id, 1);
}

#[test]
fn rerun_same_day_reemits_same_events() {
    // дедупликация — забота доставки: повторный запуск в тот же день
    // возвращает те же события
    let subs = vec![sub(1, d(2024, 1, 15), 15, 0)];
    let first = due_events(&subs, d(2024, 3, 15)).expect("events");
    let second = due_events(&subs, d(2024, 3, 15)).expect("events");
    assert_eq!(first, second);
}
