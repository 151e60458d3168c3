#[derive(Debug, Clone)]
pub enum Message {
    // === WORKLOG MESSAGES ===
    WorklogBooked { time_spent: String, issue: String },
    HoursRemaining(f64),  // hours
    HoursOverbooked(f64), // negative hours

    // === REPORT MESSAGES ===
    HistoryHeader(String),        // date
    WeekHeader(String, String),   // monday, friday
    TotalHours(f64),              // hours
    MonthHeader(String),          // month/year

    // === CONFIGURATION MESSAGES ===
    TimesheetNotSet,
    TimesheetNotBase64,
    TimesheetMalformed,

    // === VALIDATION MESSAGES ===
    UsageIntro,
    TicketRequired,
    TimeSpentRequired,
    InvalidTimeSpent(String), // given value
}
