//! Static theory content served by the `/theory/*` endpoints.
//!
//! Built once per process and memoized behind `Lazy`; the content is
//! immutable afterwards, so a racing first access is harmless.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryExample {
    pub a: u64,
    pub b: u64,
    pub result: u64,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryResponse {
    pub title: String,
    pub description: String,
    pub complexity: String,
    pub examples: Vec<TheoryExample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityInfo {
    pub time_complexity: String,
    pub space_complexity: String,
    pub description: String,
    pub worst_case: String,
    pub best_case: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsInfo {
    pub applications: Vec<Application>,
}

static EUCLID: Lazy<TheoryResponse> = Lazy::new(|| TheoryResponse {
    title: "The Euclidean algorithm".into(),
    description: "The Euclidean algorithm is an efficient method for finding the \
        greatest common divisor (GCD) of two integers. It rests on the identity \
        gcd(a, b) = gcd(b, a mod b), applied repeatedly until the remainder \
        becomes zero. The last nonzero value is the GCD."
        .into(),
    complexity: "O(log min(a, b))".into(),
    examples: vec![
        TheoryExample {
            a: 48,
            b: 18,
            result: 6,
            explanation: "48 = 18 × 2 + 12, then 18 = 12 × 1 + 6, then 12 = 6 × 2 + 0. GCD = 6"
                .into(),
        },
        TheoryExample {
            a: 100,
            b: 35,
            result: 5,
            explanation: "100 = 35 × 2 + 30, 35 = 30 × 1 + 5, 30 = 5 × 6 + 0. GCD = 5".into(),
        },
    ],
});

static COMPLEXITY: Lazy<ComplexityInfo> = Lazy::new(|| ComplexityInfo {
    time_complexity: "O(log min(a, b))".into(),
    space_complexity: "O(1)".into(),
    description: "The running time of the Euclidean algorithm is logarithmic, \
        which keeps it fast even for very large numbers. Space usage is \
        constant since only a fixed set of variables is needed."
        .into(),
    worst_case: "Consecutive Fibonacci numbers".into(),
    best_case: "One number is a multiple of the other".into(),
});

static APPLICATIONS: Lazy<ApplicationsInfo> = Lazy::new(|| ApplicationsInfo {
    applications: vec![
        Application {
            title: "Reducing fractions".into(),
            description: "The GCD is used to reduce a fraction to lowest terms".into(),
        },
        Application {
            title: "Cryptography".into(),
            description: "The extended Euclidean algorithm is used in RSA encryption".into(),
        },
        Application {
            title: "Diophantine equations".into(),
            description: "Finding integer solutions of linear equations".into(),
        },
        Application {
            title: "Repeating decimals".into(),
            description: "Finding the period of the decimal expansion of a fraction".into(),
        },
    ],
});

pub fn euclid() -> &'static TheoryResponse {
    &EUCLID
}

pub fn complexity() -> &'static ComplexityInfo {
    &COMPLEXITY
}

pub fn applications() -> &'static ApplicationsInfo {
    &APPLICATIONS
}
