use super::error::TimesheetError;
use super::messages::Message;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Duration given with `-t`, in the units Jira understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpent {
    Days(u32),
    Hours(u32),
    Minutes(u32),
}

impl TimeSpent {
    /// Seconds, counting a day as a standard 8 hour working day.
    pub fn seconds(&self) -> i64 {
        match self {
            TimeSpent::Days(days) => *days as i64 * 8 * 3600,
            TimeSpent::Hours(hours) => *hours as i64 * 3600,
            TimeSpent::Minutes(minutes) => *minutes as i64 * 60,
        }
    }
}

impl FromStr for TimeSpent {
    type Err = TimesheetError;

    /// Accepts `<n>d`, `<n>h`, `<n>m` or a bare number of minutes.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input.trim().to_lowercase();
        let invalid = || TimesheetError::Validation(Message::InvalidTimeSpent(input.to_owned()).to_string());

        let (number, unit) = match value.char_indices().last() {
            Some((index, unit @ ('d' | 'h' | 'm'))) => (&value[..index], unit),
            Some(_) => (value.as_str(), 'm'),
            None => return Err(invalid()),
        };

        let amount: u32 = number.parse().map_err(|_| invalid())?;
        if amount == 0 {
            return Err(invalid());
        }

        Ok(match unit {
            'd' => TimeSpent::Days(amount),
            'h' => TimeSpent::Hours(amount),
            _ => TimeSpent::Minutes(amount),
        })
    }
}

impl Display for TimeSpent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSpent::Days(days) => write!(f, "{}d", days),
            TimeSpent::Hours(hours) => write!(f, "{}h", hours),
            TimeSpent::Minutes(minutes) => write!(f, "{}m", minutes),
        }
    }
}
