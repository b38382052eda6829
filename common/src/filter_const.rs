//! Constants shared by the filter model and the job views.

/// Prefix for every filter query string parameter.
pub const FILTER_PREFIX: &str = "filter-";

pub const RESULT_STATUS: &str = "resultStatus";
pub const CLASSIFIED_STATE: &str = "classifiedState";
pub const SEARCH_STR: &str = "searchStr";
pub const TIER: &str = "tier";
pub const PLATFORM: &str = "platform";

pub const CLASSIFIED: &str = "classified";
pub const UNCLASSIFIED: &str = "unclassified";

/// Status of jobs that have not run yet but could be scheduled.
pub const RUNNABLE: &str = "runnable";
pub const SUPERSEDED: &str = "superseded";

pub const ALL_RESULT_STATUSES: &[&str] = &[
    "testfailed",
    "busted",
    "exception",
    "success",
    "retry",
    "usercancel",
    "running",
    "pending",
    "superseded",
    "runnable",
];

pub const DEFAULT_RESULT_STATUSES: &[&str] = &[
    "testfailed",
    "busted",
    "exception",
    "success",
    "retry",
    "usercancel",
    "running",
    "pending",
    "runnable",
];

pub const FAILURE_RESULTS: &[&str] = &["testfailed", "busted", "exception"];

pub const IN_PROGRESS_STATUSES: &[&str] = &["pending", "running"];

pub const DEFAULT_CLASSIFIED_STATES: &[&str] = &[CLASSIFIED, UNCLASSIFIED];

pub const DEFAULT_TIERS: &[&str] = &["1", "2"];

pub const TIERS: &[&str] = &["1", "2", "3"];

/// Named groups of result statuses toggled together from the UI.
pub const FILTER_GROUPS: &[(&str, &[&str])] = &[
    ("failures", FAILURE_RESULTS),
    ("nonfailures", &["success", "retry", "usercancel", "superseded"]),
    ("in progress", IN_PROGRESS_STATUSES),
];

/// Query parameters that travel with the filters but are never filters.
pub const NON_FIELD_FILTERS: &[&str] = &[
    "fromchange",
    "tochange",
    "author",
    "nojobs",
    "startdate",
    "enddate",
    "revision",
];

/// Failure classification ids that still count as "unclassified".
pub const UNCLASSIFIED_IDS: &[u32] = &[1, 7];

pub const PLATFORM_MAP: &[(&str, &str)] = &[
    ("linux32", "Linux"),
    ("linux32-devedition", "Linux DevEdition"),
    ("linux64", "Linux x64"),
    ("linux64-asan", "Linux x64 asan"),
    ("linux64-ccov", "Linux x64 CCov"),
    ("linux64-devedition", "Linux x64 DevEdition"),
    ("linux64-qr", "Linux x64 QuantumRender"),
    ("osx-10-10", "OS X 10.10"),
    ("osx-cross", "OS X Cross Compiled"),
    ("macosx64", "OS X 10.10"),
    ("windows7-32", "Windows 7"),
    ("windows7-32-devedition", "Windows 7 DevEdition"),
    ("windows10-64", "Windows 10 x64"),
    ("windows10-64-ccov", "Windows 10 x64 CCov"),
    ("windows10-64-devedition", "Windows 10 x64 DevEdition"),
    ("windows2012-32", "Windows 2012"),
    ("windows2012-64", "Windows 2012 x64"),
    ("android-4-0-armv7-api16", "Android 4.0 API16+"),
    ("android-4-2-x86", "Android 4.2 x86"),
    ("android-5-0-aarch64", "Android 5.0 AArch64"),
    ("android-hw-g5-7-0-arm7-api-16", "Android 7.0 MotoG5"),
    ("gecko-decision", "Gecko Decision Task"),
    ("lint", "Linting"),
    ("other", "Other"),
];
