//! The fixed dataset every session starts from.

use super::prescription::Prescription;
use chrono::NaiveDate;

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

struct SeedRow {
    id: &'static str,
    name: &'static str,
    quantity: u32,
    date_filled: NaiveDate,
    refills: u32,
    category: &'static str,
    active: bool,
    auto_refill_eligible: bool,
    auto_refill: bool,
    instructions: &'static str,
    notify_refill: bool,
}

#[rustfmt::skip]
const SEED: [SeedRow; 11] = [
    SeedRow { id: "1", name: "Lisinopril", quantity: 30, date_filled: ymd(2023, 9, 1), refills: 2, category: "Blood Pressure", active: true, auto_refill_eligible: true, auto_refill: true, instructions: "Take 1 tablet daily", notify_refill: true },
    SeedRow { id: "2", name: "Metformin", quantity: 3, date_filled: ymd(2023, 9, 15), refills: 0, category: "Diabetes", active: true, auto_refill_eligible: false, auto_refill: false, instructions: "Take 2 tablets daily", notify_refill: true },
    SeedRow { id: "3", name: "Atorvastatin", quantity: 15, date_filled: ymd(2023, 8, 20), refills: 1, category: "Cholesterol", active: true, auto_refill_eligible: true, auto_refill: true, instructions: "Take 1 tablet at night", notify_refill: false },
    SeedRow { id: "4", name: "Sertraline", quantity: 4, date_filled: ymd(2023, 9, 10), refills: 3, category: "Mental Health", active: true, auto_refill_eligible: false, auto_refill: false, instructions: "Take 1 tablet in the morning", notify_refill: true },
    SeedRow { id: "5", name: "Omeprazole", quantity: 28, date_filled: ymd(2023, 9, 5), refills: 2, category: "Digestive", active: true, auto_refill_eligible: true, auto_refill: false, instructions: "Take 1 capsule before breakfast", notify_refill: false },
    SeedRow { id: "6", name: "Levothyroxine", quantity: 2, date_filled: ymd(2023, 9, 12), refills: 1, category: "Thyroid", active: true, auto_refill_eligible: false, auto_refill: false, instructions: "Take on empty stomach in morning", notify_refill: true },
    SeedRow { id: "7", name: "Amlodipine", quantity: 45, date_filled: ymd(2023, 8, 25), refills: 4, category: "Blood Pressure", active: true, auto_refill_eligible: true, auto_refill: true, instructions: "Take 1 tablet daily with food", notify_refill: false },
    SeedRow { id: "8", name: "Gabapentin", quantity: 60, date_filled: ymd(2023, 9, 3), refills: 0, category: "Pain Management", active: false, auto_refill_eligible: false, auto_refill: false, instructions: "Take 1 capsule three times daily", notify_refill: true },
    SeedRow { id: "9", name: "Montelukast", quantity: 7, date_filled: ymd(2023, 9, 8), refills: 5, category: "Allergy", active: true, auto_refill_eligible: true, auto_refill: true, instructions: "Take 1 tablet at bedtime", notify_refill: true },
    SeedRow { id: "10", name: "Escitalopram", quantity: 3, date_filled: ymd(2024, 3, 15), refills: 1, category: "Mental Health", active: true, auto_refill_eligible: true, auto_refill: true, instructions: "Take 1 tablet daily in the morning", notify_refill: true },
    SeedRow { id: "11", name: "Hydrochlorothiazide", quantity: 4, date_filled: ymd(2024, 3, 20), refills: 2, category: "Blood Pressure", active: true, auto_refill_eligible: true, auto_refill: true, instructions: "Take 1 tablet daily with water", notify_refill: true },
];

/// A fresh copy of the seed dataset, in its original order.
pub fn seed_prescriptions() -> Vec<Prescription> {
    SEED.iter()
        .map(|r| Prescription {
            id: r.id.to_string(),
            name: r.name.to_string(),
            quantity: r.quantity,
            date_filled: r.date_filled,
            refills: r.refills,
            category: r.category.to_string(),
            active: r.active,
            instructions: r.instructions.to_string(),
            auto_refill: r.auto_refill,
            auto_refill_eligible: r.auto_refill_eligible,
            notify_refill: r.notify_refill,
        })
        .collect()
}
