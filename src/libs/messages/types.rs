#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,
    ConfigModuleReport,
    ConfigModuleProfit,
    ConfigParseError(String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseOpenFailed(String),

    // === ENTRY MESSAGES ===
    EntriesLoaded(usize),
    NoEntriesFound,
    ClientNotFound(i64),

    // === REPORT MESSAGES ===
    ReportHeader(String),
    ReportGrouping(String),
    TotalsOnlyNotice,
    HtmlReportWritten(String),

    // === EXPORT MESSAGES ===
    ExportingData(String),
    ExportCompleted(String),

    // === TEAM SUMMARY MESSAGES ===
    TeamSummaryHeader(String, String),
    WorkingDays(i64),
    LeaveProjectNotFound,
    HolidayProjectNotFound,

    // === PROFIT MESSAGES ===
    ProfitHeader(String, String),
    ProfitWritten(String),
    NoUsersFound,

    // === PROGRESS MESSAGES ===
    ProgressWritten(String),

    // === LOOKUP MESSAGES ===
    DateRange(String, String),
    NoDateRange,
    LookupEmpty(String),

    // === INPUT MESSAGES ===
    InvalidDateRange(String, String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptDatabasePath,
    PromptDefaultGrouping,
    PromptTotalsOnly,
    PromptReportTitle,
    PromptClientRate,
}
