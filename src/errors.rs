//! Unified application error type.
//! All modules (core, store, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid entry file: {0}")]
    EntryFile(#[from] serde_json::Error),

    // ---------------------------
    // Day-block validation
    // ---------------------------
    /// One or more day blocks are malformed. Errors are collected across
    /// every block before anything is derived or sent to the store.
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<String>),

    // ---------------------------
    // Store / protocol errors
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to save table: {0}")]
    Save(String),

    // ---------------------------
    // Table edit boundary
    // ---------------------------
    #[error("Field '{0}' is protected and cannot be edited")]
    FieldProtected(String),

    #[error("Historical rows are display-only and cannot be edited")]
    RowProtected,

    #[error("No row at index {0}")]
    InvalidRow(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
