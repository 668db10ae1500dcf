use serde::{Deserialize, Serialize};

/// 網站所有業務內容，每次建置只解析一次，之後唯讀
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub history: History,
    pub services: Vec<Service>,
    pub certifications: Vec<String>,
    pub values: Vec<String>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub founded: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Not part of the extraction schema; missing on the wire means "".
    #[serde(default)]
    pub hours: String,
}

/// Static, non-business settings the presenter needs (brand, footer year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    pub site_name: String,
    pub tagline: String,
    pub language: String,
    pub stylesheet: Option<String>,
    pub copyright_year: i32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            site_name: "Consola".to_string(),
            tagline: "Menuiserie d'Excellence".to_string(),
            language: "fr".to_string(),
            stylesheet: None,
            copyright_year: 2026,
        }
    }
}
