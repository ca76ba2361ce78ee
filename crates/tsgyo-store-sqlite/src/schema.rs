//! SQL schema for the TSGYO store.
//!
//! Column names and types are shared with databases created by earlier
//! tooling and must not change.

/// DDL for all three relations; idempotent thanks to
/// `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
-- KAP (Public Disclosure Platform) notifications.
CREATE TABLE IF NOT EXISTS kap_notifications (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    company_code     TEXT NOT NULL,
    kap_id           TEXT NOT NULL,
    type             TEXT,
    title            TEXT,
    publish_datetime TEXT,
    url              TEXT,
    created_at       TEXT DEFAULT (datetime('now')),
    UNIQUE(company_code, kap_id)
);

-- One row per reporting period; periods are deliberately not unique.
CREATE TABLE IF NOT EXISTS financial_kpi (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    period                TEXT NOT NULL,
    total_assets          REAL,
    equity                REAL,
    investment_properties REAL,
    net_rental_income     REAL,
    net_profit            REAL
);

CREATE TABLE IF NOT EXISTS portfolio_properties (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    name               TEXT NOT NULL,
    property_type      TEXT,
    city               TEXT,
    gross_area_sqm     REAL,    -- enclosed area
    gla_sqm            REAL,    -- leasable area, retail only
    rooms              INTEGER, -- hotels only
    valuation_value_tl REAL,
    valuation_date     TEXT
);
";

pub const INSERT_KPI: &str = "
INSERT INTO financial_kpi
    (period, total_assets, equity, investment_properties, net_rental_income, net_profit)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub const INSERT_PROPERTY: &str = "
INSERT INTO portfolio_properties
    (name, property_type, city, gross_area_sqm, gla_sqm, rooms,
     valuation_value_tl, valuation_date)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

pub const SELECT_KPI: &str = "
SELECT id, period, total_assets, equity, investment_properties,
       net_rental_income, net_profit
FROM financial_kpi";

pub const SELECT_PROPERTY: &str = "
SELECT id, name, property_type, city, gross_area_sqm, gla_sqm, rooms,
       valuation_value_tl, valuation_date
FROM portfolio_properties";

pub const SELECT_DISCLOSURE: &str = "
SELECT id, company_code, kap_id, type, title, publish_datetime, url, created_at
FROM kap_notifications";
