//! Fixtures shared by the in-crate test modules.

use chrono::{NaiveDate, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::model::attendance::{AttendanceRecord, AttendanceSnapshot};
use crate::model::employee::Employee;
use crate::models::{Claims, TokenType};

pub const JWT_SECRET: &str = "test-secret";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn config() -> Config {
    config_with(&[])
}

/// Test config with extra environment overrides.
pub fn config_with(overrides: &[(&str, &str)]) -> Config {
    Config::from_lookup(|key| {
        if let Some((_, value)) = overrides.iter().find(|(k, _)| *k == key) {
            return Some(value.to_string());
        }
        match key {
            "SERVER_ADDR" => Some("127.0.0.1:0".into()),
            "DATABASE_URL" => Some("mysql://hr:hr@127.0.0.1:3306/hr".into()),
            "JWT_SECRET" => Some(JWT_SECRET.into()),
            _ => None,
        }
    })
    .unwrap()
}

/// Pool that never connects unless a query runs.
pub fn lazy_pool() -> MySqlPool {
    MySqlPoolOptions::new()
        .connect_lazy("mysql://hr:hr@127.0.0.1:3306/hr")
        .unwrap()
}

/// Pool pointed at a closed port, so every query fails fast.
pub fn unreachable_pool() -> MySqlPool {
    MySqlPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("mysql://hr:hr@127.0.0.1:1/hr")
        .unwrap()
}

fn record(id: u64, employee: &str, day: u32, overtime_hours: f64, absent: bool) -> AttendanceRecord {
    AttendanceRecord {
        id,
        employee: employee.into(),
        document: format!("CC-{id}"),
        date: date(2026, 1, day),
        overtime_hours,
        absent,
    }
}

fn employee(id: u64, full_name: &str) -> Employee {
    Employee {
        id,
        full_name: full_name.into(),
        document: format!("CC-{id}"),
        position: None,
        status: "active".into(),
    }
}

pub fn sample_snapshot() -> AttendanceSnapshot {
    AttendanceSnapshot {
        employees: vec![
            employee(1, "Ana Díaz"),
            employee(2, "Luis Mora"),
            employee(3, "Marta Ruiz"),
        ],
        records: vec![
            record(1, "Ana Díaz", 5, 0.0, false),
            record(2, "Luis Mora", 5, 2.0, false),
            record(3, "Marta Ruiz", 6, 0.0, true),
            record(4, "Pedro Gil", 7, 1.5, true),
        ],
        loaded_at: Utc.with_ymd_and_hms(2026, 1, 8, 9, 0, 0).unwrap(),
    }
}

pub fn token(role: u8, token_type: TokenType) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        user_id: 7,
        sub: "hr.lead".into(),
        role,
        exp: now + 600,
        jti: format!("jti-{now}-{role}"),
        token_type,
        employee_id: None,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
