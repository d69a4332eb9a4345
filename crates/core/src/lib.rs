//! ward-core: Shared domain types for the ward census service
//!
//! This crate provides the types used across the server and its tests,
//! including Patient, MedicalNote, and the request payload types.

pub mod note;
pub mod patient;

pub use note::{MedicalNote, NewNote, SYSTEM_AUTHOR};
pub use patient::{
    DischargeRequest, NewPatient, Patient, PatientStatus, PatientUpdate, StatusParseError,
};
