//! Решение «кого уведомить сегодня». Состояние доставки ядро не хранит:
//! запуск рассчитан на один раз в календарный день, повторный запуск в тот
//! же день выдаст те же события — дедупликация на стороне доставки.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::{error::Result, model::Subscription, projector, traits::Notifier};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// за notify_days_before дней до списания
    Reminder,
    /// в день списания
    SameDay,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BillingEvent {
    pub subscription_id: i64,
    pub kind: EventKind,
    pub days_left: i64,
}

/// События на дату `today`. На подписку — не больше одного события:
/// при notify_days_before == 0 напоминание и «сегодня списание» совпадают,
/// и уходит только одно.
pub fn due_events(subs: &[Subscription], today: NaiveDate) -> Result<Vec<BillingEvent>> {
    let mut events = Vec::new();
    for sub in subs {
        let Some(days_left) = projector::days_until(sub, today)? else {
            continue;
        };
        if days_left == 0 {
            events.push(BillingEvent {
                subscription_id: sub.id,
                kind: EventKind::SameDay,
                days_left,
            });
        } else if days_left == sub.notify_days_before as i64 {
            events.push(BillingEvent {
                subscription_id: sub.id,
                kind: EventKind::Reminder,
                days_left,
            });
        }
    }
    Ok(events)
}

/// Ежедневный проход: считает события и отдаёт их в канал доставки.
/// Возвращает число отправленных.
pub fn run_daily_check<N: Notifier>(
    subs: &[Subscription],
    today: NaiveDate,
    notifier: &mut N,
) -> Result<usize> {
    let events = due_events(subs, today)?;
    for event in &events {
        notifier.notify(event)?;
    }
    info!(checked = subs.len(), fired = events.len(), "проход по подпискам завершён");
    Ok(events.len())
}
