//! podpiskilib — ядро трекера регулярных подписок: календарная арифметика,
//! проекция дат списаний, сводки и решения об уведомлениях.

pub mod error;
pub mod model;
pub mod traits;
pub mod calendar;
pub mod projector;
pub mod aggregate;
pub mod notify;
pub mod money;

pub mod formats {
    pub mod csv;
    pub mod json;
}
