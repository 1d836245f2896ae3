//! Ukrainian messages

use crate::cli::helpers::format_kg;
use crate::core::event::{Event, Reading, Section};
use crate::core::vehicle::VehicleKind;

pub(super) fn section(section: &Section) -> String {
    match section {
        Section::Title => "=== ТРАНСПОРТНА КОМПАНІЯ ===".to_string(),
        Section::Polymorphism => {
            "--- Поліморфізм: всі транспортні засоби рухаються ---".to_string()
        }
        Section::Bus => "--- Робота з автобусом ---".to_string(),
        Section::Truck => "--- Робота з вантажівкою ---".to_string(),
        Section::Bicycle => "--- Робота з велосипедом ---".to_string(),
        Section::Cargo => "--- Поліморфізм: завантаження вантажу ---".to_string(),
        Section::Encapsulation => "--- Демонстрація інкапсуляції ---".to_string(),
        Section::Custom(title) => format!("--- {} ---", title),
    }
}

pub(super) fn event(event: &Event) -> String {
    match event {
        Event::Info { brand, capacity } => {
            format!("Транспортний засіб: {}, місткість: {}", brand, capacity)
        }
        Event::Moving {
            kind, brand, load, ..
        } => match kind {
            VehicleKind::Bus => format!("Автобус {} їде по міському маршруту", brand),
            VehicleKind::Truck => format!(
                "Вантажівка {} їде по шосе з вантажем {} кг",
                brand,
                format_kg(load.unwrap_or_default())
            ),
            VehicleKind::Bicycle => format!("Велосипед {} їде по велодоріжці", brand),
        },
        Event::Boarded { count, total } => {
            format!("{} пасажирів сіли в автобус. Всього: {}", count, total)
        }
        Event::BoardingRefused { capacity } => {
            format!("Недостатньо місць! Максимум: {}", capacity)
        }
        Event::Dropped { count, remaining } => {
            format!(
                "{} пасажирів вийшли з автобусу. Залишилось: {}",
                count, remaining
            )
        }
        Event::Loaded {
            kind: VehicleKind::Bicycle,
            weight,
            current,
        } => format!(
            "Завантажено {} кг у кошик. Поточний вантаж: {} кг",
            format_kg(*weight),
            format_kg(*current)
        ),
        Event::Loaded {
            weight, current, ..
        } => format!(
            "Завантажено {} кг. Поточний вантаж: {} кг",
            format_kg(*weight),
            format_kg(*current)
        ),
        Event::Overloaded {
            kind: VehicleKind::Bicycle,
            max,
        } => format!("Кошик переповнений! Максимум: {} кг", format_kg(*max)),
        Event::Overloaded { max, .. } => {
            format!("Перевантаження! Максимум: {} кг", format_kg(*max))
        }
        Event::NoBasket => "Велосипед не має кошика для вантажу!".to_string(),
        Event::InvalidWeight { weight } => {
            format!("Некоректна вага вантажу: {} кг", format_kg(*weight))
        }
        Event::Unloaded {
            kind: VehicleKind::Bicycle,
            amount,
        } => format!("Розвантажено {} кг з кошика", format_kg(*amount)),
        Event::Unloaded { amount, .. } => format!("Розвантажено {} кг", format_kg(*amount)),
    }
}

pub(super) fn reading(reading: &Reading) -> String {
    match reading {
        Reading::MaxLoad { kg } => format!("Максимальне навантаження: {} кг", format_kg(*kg)),
        Reading::CurrentLoad { kg } => format!("Поточне навантаження: {} кг", format_kg(*kg)),
        Reading::Brand { kind, brand } => {
            let noun = match kind {
                VehicleKind::Bus => "автобусу",
                VehicleKind::Truck => "вантажівки",
                VehicleKind::Bicycle => "велосипеда",
            };
            format!("Бренд {}: {}", noun, brand)
        }
        Reading::Capacity { capacity } => format!("Місткість: {}", capacity),
        Reading::Passengers { count, capacity } => {
            format!("Пасажирів: {}/{}", count, capacity)
        }
    }
}
