/// One MX record: an exchange host and its preference weight.
///
/// Lower preference means higher priority. Lists returned by the resolver
/// are sorted ascending by preference; records with equal preference keep
/// the order of the DNS response.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}
