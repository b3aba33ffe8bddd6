use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TriggerError {
    InvalidInput = 1,
    Unauthorized = 2,
    Overflow = 3,
}

impl TriggerError {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(TriggerError::InvalidInput),
            2 => Some(TriggerError::Unauthorized),
            3 => Some(TriggerError::Overflow),
            _ => None,
        }
    }
}
