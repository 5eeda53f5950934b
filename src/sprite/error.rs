/// The error returned in sprite allocation-related failure cases.
#[derive(Clone, Debug, PartialEq)]
pub enum HWSpriteAllocError {
    OAMFull,
}

impl core::fmt::Display for HWSpriteAllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use HWSpriteAllocError::*;
        match self {
            OAMFull => write!(
                f,
                "HWSpriteAllocError: Can't create sprite because OAM is full"
            ),
        }
    }
}
