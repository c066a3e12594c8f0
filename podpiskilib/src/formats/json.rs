//! Снапшот подписок в JSON: массив объектов модели, значения по умолчанию
//! расставляет serde, инварианты проверяются после разбора.

use crate::{error::Result, model::Subscription};
use std::io::BufRead;

pub struct Json;

impl crate::traits::ReadSnapshot for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Subscription>> {
        let subs: Vec<Subscription> = serde_json::from_reader(r)?;
        for sub in &subs {
            sub.validate()?;
        }
        Ok(subs)
    }
}
