//! Mock records the console starts with
//!
//! Nothing is persisted: every session begins from these lists.

use crate::entities::*;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn s(value: &str) -> String {
    value.to_string()
}

pub fn prescriptions() -> Vec<Prescription> {
    use PrescriptionStatus::*;

    let rows = [
        ("RX-1001", "John Smith", "Lisinopril", "10mg once daily", "Dr. Patel", Pending, Priority::Normal, date(2024, 3, 1), 3),
        ("RX-1002", "Maria Lopez", "Metformin", "500mg twice daily", "Dr. Nguyen", Processing, Priority::High, date(2024, 3, 2), 5),
        ("RX-1003", "Robert Johnson", "Atorvastatin", "20mg at bedtime", "Dr. Patel", Ready, Priority::Normal, date(2024, 2, 27), 2),
        ("RX-1004", "Emily Davis", "Amoxicillin", "500mg three times daily", "Dr. Kim", Pending, Priority::Urgent, date(2024, 3, 3), 0),
        ("RX-1005", "Anna Smith", "Levothyroxine", "50mcg once daily", "Dr. Nguyen", Completed, Priority::Low, date(2024, 2, 20), 11),
        ("RX-1006", "David Wilson", "Insulin glargine", "20 units at night", "Dr. Kim", Processing, Priority::Urgent, date(2024, 3, 2), 4),
        ("RX-1007", "Linda Brown", "Omeprazole", "20mg before breakfast", "Dr. Patel", Cancelled, Priority::Low, date(2024, 2, 15), 1),
        ("RX-1008", "James Taylor", "Amlodipine", "5mg once daily", "Dr. Garcia", Ready, Priority::High, date(2024, 3, 1), 6),
    ];

    rows.into_iter()
        .map(
            |(id, patient, medication, dosage, prescriber, status, priority, date_issued, refills)| Prescription {
                id: s(id),
                patient: s(patient),
                medication: s(medication),
                dosage: s(dosage),
                prescriber: s(prescriber),
                status,
                priority,
                date_issued,
                refills,
            },
        )
        .collect()
}

pub fn patients() -> Vec<Patient> {
    use PatientStatus::*;

    let rows = [
        ("PT-001", "John Smith", date(1958, 4, 12), "(555) 201-3344", "john.smith@example.com", Some("BlueCross"), Active, Some(date(2024, 3, 1))),
        ("PT-002", "Maria Lopez", date(1972, 9, 3), "(555) 201-7781", "maria.lopez@example.com", Some("Aetna"), Active, Some(date(2024, 2, 28))),
        ("PT-003", "Robert Johnson", date(1949, 1, 22), "(555) 301-1200", "r.johnson@example.com", Some("Medicare"), Active, Some(date(2024, 2, 27))),
        ("PT-004", "Emily Davis", date(1990, 11, 30), "(555) 410-9921", "emily.davis@example.com", None, Active, None),
        ("PT-005", "Anna Smith", date(1985, 7, 8), "(555) 411-0042", "anna.s@example.com", Some("Cigna"), Inactive, Some(date(2023, 11, 14))),
        ("PT-006", "David Wilson", date(1966, 5, 19), "(555) 520-8830", "dwilson@example.com", Some("BlueCross"), Active, Some(date(2024, 3, 2))),
    ];

    rows.into_iter()
        .map(|(id, name, date_of_birth, phone, email, insurance, status, last_visit)| Patient {
            id: s(id),
            name: s(name),
            date_of_birth,
            phone: s(phone),
            email: s(email),
            insurance: insurance.map(s),
            status,
            last_visit,
        })
        .collect()
}

/// Twelve items, seven of them at or below their reorder threshold
/// (two of those out of stock).
pub fn inventory() -> Vec<InventoryItem> {
    let rows = [
        ("INV-001", "Amoxicillin 500mg", "Antibiotics", 240, 50, 0.45, "MedSupply Co", Some(date(2025, 6, 30))),
        ("INV-002", "Lisinopril 10mg", "Cardiovascular", 35, 40, 0.12, "PharmaDirect", Some(date(2025, 9, 30))),
        ("INV-003", "Metformin 500mg", "Diabetes", 0, 60, 0.08, "MedSupply Co", Some(date(2025, 3, 31))),
        ("INV-004", "Atorvastatin 20mg", "Cardiovascular", 180, 40, 0.30, "HealthSource", Some(date(2025, 12, 31))),
        ("INV-005", "Insulin glargine", "Diabetes", 8, 10, 28.50, "PharmaDirect", Some(date(2024, 8, 31))),
        ("INV-006", "Omeprazole 20mg", "Gastrointestinal", 15, 30, 0.22, "HealthSource", Some(date(2025, 5, 31))),
        ("INV-007", "Levothyroxine 50mcg", "Endocrine", 300, 50, 0.18, "MedSupply Co", Some(date(2026, 1, 31))),
        ("INV-008", "Amlodipine 5mg", "Cardiovascular", 20, 20, 0.10, "PharmaDirect", Some(date(2025, 7, 31))),
        ("INV-009", "Albuterol inhaler", "Respiratory", 0, 12, 24.00, "RespiraCare", Some(date(2025, 2, 28))),
        ("INV-010", "Ibuprofen 200mg", "Analgesics", 500, 100, 0.05, "HealthSource", Some(date(2026, 4, 30))),
        ("INV-011", "Sertraline 50mg", "Mental Health", 25, 30, 0.35, "MedSupply Co", Some(date(2025, 10, 31))),
        ("INV-012", "Cetirizine 10mg", "Allergy", 140, 40, 0.09, "PharmaDirect", None),
    ];

    rows.into_iter()
        .map(
            |(id, name, category, quantity, min_stock, unit_price, supplier, expiry_date)| InventoryItem {
                id: s(id),
                name: s(name),
                category: s(category),
                quantity,
                min_stock,
                unit_price,
                supplier: s(supplier),
                expiry_date,
            },
        )
        .collect()
}

/// Seven deliveries, two of them for patients named Smith
pub fn deliveries() -> Vec<Delivery> {
    use DeliveryStatus::*;

    let rows = [
        ("DEL-001", "John Smith", "12 Oak Street", Some("Mike Rivera"), Scheduled, at(2024, 3, 4, 10, 0), 2),
        ("DEL-002", "Maria Lopez", "48 Pine Avenue", Some("Mike Rivera"), InTransit, at(2024, 3, 3, 14, 30), 1),
        ("DEL-003", "Robert Johnson", "7 Elm Court", Some("Tina Brooks"), Delivered, at(2024, 3, 1, 9, 15), 3),
        ("DEL-004", "Anna Smith", "220 Birch Road", None, Scheduled, at(2024, 3, 5, 11, 0), 1),
        ("DEL-005", "David Wilson", "3 Cedar Lane", Some("Tina Brooks"), Failed, at(2024, 3, 2, 16, 45), 2),
        ("DEL-006", "Emily Davis", "95 Maple Drive", Some("Mike Rivera"), Delivered, at(2024, 2, 29, 13, 0), 4),
        ("DEL-007", "Linda Brown", "61 Willow Way", None, Cancelled, at(2024, 3, 6, 10, 30), 1),
    ];

    rows.into_iter()
        .map(|(id, patient, address, driver, status, scheduled_for, items)| Delivery {
            id: s(id),
            patient: s(patient),
            address: s(address),
            driver: driver.map(s),
            status,
            scheduled_for,
            items,
        })
        .collect()
}

/// Alerts on the dashboard; none are archived yet
pub fn alerts() -> Vec<Alert> {
    use AlertStatus::*;

    let rows = [
        ("AL-001", "Metformin out of stock", "Metformin 500mg has no units left", AlertCategory::Inventory, Priority::Urgent, Active, at(2024, 3, 3, 8, 0)),
        ("AL-002", "Insulin expiring soon", "Insulin glargine lot expires end of August", AlertCategory::Inventory, Priority::High, Active, at(2024, 3, 2, 9, 30)),
        ("AL-003", "Prescription awaiting review", "RX-1004 flagged for interaction check", AlertCategory::Prescription, Priority::High, Active, at(2024, 3, 3, 10, 15)),
        ("AL-004", "Delivery failed", "DEL-005 could not be completed", AlertCategory::Delivery, Priority::Normal, Resolved, at(2024, 3, 2, 17, 0)),
        ("AL-005", "Backup completed", "Nightly backup finished", AlertCategory::System, Priority::Low, Resolved, at(2024, 3, 3, 2, 0)),
        ("AL-006", "Albuterol out of stock", "Albuterol inhaler has no units left", AlertCategory::Inventory, Priority::Urgent, Active, at(2024, 3, 3, 8, 5)),
    ];

    rows.into_iter()
        .map(|(id, title, message, category, priority, status, created_at)| Alert {
            id: s(id),
            title: s(title),
            message: s(message),
            category,
            priority,
            status,
            archived: false,
            created_at,
        })
        .collect()
}

pub fn activities() -> Vec<Activity> {
    use ActivityStatus::*;

    let rows = [
        ("AC-001", "Verify controlled substance count", "Sarah Chen", Pending, at(2024, 3, 3, 9, 0)),
        ("AC-002", "Filled RX-1003", "James Park", Completed, at(2024, 3, 2, 15, 20)),
        ("AC-003", "Call PharmaDirect about back order", "Sarah Chen", Pending, at(2024, 3, 3, 11, 0)),
        ("AC-004", "Received PO-2024-003", "Lisa Wong", Completed, at(2024, 3, 1, 12, 45)),
    ];

    rows.into_iter()
        .map(|(id, description, user, status, created_at)| Activity {
            id: s(id),
            description: s(description),
            user: s(user),
            status,
            created_at,
        })
        .collect()
}

pub fn vendors() -> Vec<Vendor> {
    use VendorStatus::*;

    let rows = [
        ("VEN-001", "MedSupply Co", "Karen Ortiz", "orders@medsupply.example.com", "(555) 700-1000", "Wholesale", Active, 4.6),
        ("VEN-002", "PharmaDirect", "Tom Hughes", "sales@pharmadirect.example.com", "(555) 700-2000", "Wholesale", Active, 4.2),
        ("VEN-003", "HealthSource", "Priya Shah", "support@healthsource.example.com", "(555) 700-3000", "Generics", Active, 3.9),
        ("VEN-004", "RespiraCare", "Owen Miller", "hello@respiracare.example.com", "(555) 700-4000", "Specialty", Pending, 0.0),
    ];

    rows.into_iter()
        .map(|(id, name, contact, email, phone, category, status, rating)| Vendor {
            id: s(id),
            name: s(name),
            contact: s(contact),
            email: s(email),
            phone: s(phone),
            category: s(category),
            status,
            rating,
        })
        .collect()
}

/// Orders with distinct totals
pub fn purchase_orders() -> Vec<PurchaseOrder> {
    use OrderStatus::*;

    let rows = [
        ("PO-2024-001", "MedSupply Co", Received, date(2024, 2, 1), Some(date(2024, 2, 8)), 12, "$2,400.00", "$192.00", "$2,592.00"),
        ("PO-2024-002", "PharmaDirect", Approved, date(2024, 2, 14), Some(date(2024, 2, 21)), 5, "$980.50", "$78.44", "$1,058.94"),
        ("PO-2024-003", "HealthSource", Received, date(2024, 2, 20), Some(date(2024, 3, 1)), 3, "$310.00", "$24.80", "$334.80"),
        ("PO-2024-004", "RespiraCare", Submitted, date(2024, 3, 1), None, 2, "$480.00", "$38.40", "$518.40"),
        ("PO-2024-005", "MedSupply Co", Draft, date(2024, 3, 3), None, 20, "$12,750.00", "$1,020.00", "$13,770.00"),
        ("PO-2024-006", "PharmaDirect", Cancelled, date(2024, 1, 18), None, 1, "$95.00", "$7.60", "$102.60"),
    ];

    rows.into_iter()
        .map(
            |(id, vendor, status, order_date, expected_date, line_items, subtotal, tax, total)| PurchaseOrder {
                id: s(id),
                vendor: s(vendor),
                status,
                order_date,
                expected_date,
                line_items,
                totals: OrderTotals {
                    subtotal: s(subtotal),
                    tax: s(tax),
                    total: s(total),
                },
            },
        )
        .collect()
}

pub fn staff() -> Vec<StaffMember> {
    use StaffRole::*;
    use StaffStatus::*;

    let rows = [
        ("ST-01", "Sarah Chen", Pharmacist, "sarah.chen@pharmadesk.example.com", "(555) 800-0101", Active, date(2018, 5, 1)),
        ("ST-02", "James Park", Technician, "james.park@pharmadesk.example.com", "(555) 800-0102", Active, date(2021, 9, 15)),
        ("ST-03", "Lisa Wong", Admin, "lisa.wong@pharmadesk.example.com", "(555) 800-0103", Active, date(2016, 2, 1)),
        ("ST-04", "Mike Rivera", Driver, "mike.rivera@pharmadesk.example.com", "(555) 800-0104", Active, date(2022, 6, 20)),
        ("ST-05", "Tina Brooks", Driver, "tina.brooks@pharmadesk.example.com", "(555) 800-0105", OnLeave, date(2023, 1, 9)),
    ];

    rows.into_iter()
        .map(|(id, name, role, email, phone, status, hired_on)| StaffMember {
            id: s(id),
            name: s(name),
            role,
            email: s(email),
            phone: s(phone),
            status,
            hired_on,
        })
        .collect()
}

pub fn messages() -> Vec<Message> {
    let rows = [
        ("MSG-01", "Dr. Patel", "Refill authorization for John Smith", "Approved three more refills of Lisinopril.", Priority::Normal, false, false, at(2024, 3, 3, 8, 45)),
        ("MSG-02", "PharmaDirect", "Back order notice", "Metformin 500mg ships next week.", Priority::High, false, false, at(2024, 3, 2, 16, 10)),
        ("MSG-03", "Lisa Wong", "Staff meeting", "Friday 8am in the back office.", Priority::Low, true, false, at(2024, 3, 1, 12, 0)),
        ("MSG-04", "Dr. Kim", "Interaction check RX-1004", "Please confirm allergies before filling.", Priority::Urgent, false, false, at(2024, 3, 3, 10, 5)),
        ("MSG-05", "MedSupply Co", "January invoice", "Invoice paid, thank you.", Priority::Low, true, true, at(2024, 2, 2, 9, 0)),
    ];

    rows.into_iter()
        .map(|(id, sender, subject, body, priority, read, archived, sent_at)| Message {
            id: s(id),
            sender: s(sender),
            subject: s(subject),
            body: s(body),
            priority,
            read,
            archived,
            sent_at,
        })
        .collect()
}
