//! Master-ledger row for one enrolled fingerprint.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    pub token: u32,
    pub name: String,
    pub date_of_birth: String,
    pub father_name: String,
    pub license_number: String,
    pub license_expiry: String,
    pub national_id: String,
}

impl EnrollmentRecord {
    /// Column order of the master ledger.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.token.to_string(),
            self.name.clone(),
            self.date_of_birth.clone(),
            self.father_name.clone(),
            self.license_number.clone(),
            self.license_expiry.clone(),
            self.national_id.clone(),
        ]
    }
}
