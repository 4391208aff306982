//! TriAD Screening - Cognitive screening wizard and risk scoring
//!
//! This crate drives a participant through a multi-step assessment
//! (demographics, optional speech and stroop telemetry, symptom questions,
//! everyday-judgement scenarios) and maps the finished record to a 0-100
//! risk score with a LOW / MODERATE / HIGH reading.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
