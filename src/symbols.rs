// Visual symbols and emoji constants used in terminal and log output
// Named by meaning rather than by the specific emoji

/// Status and feedback symbols
pub const SYMBOL_INDICATOR_SUCCESS: &str = "✅";
pub const SYMBOL_INDICATOR_INFO: &str = "📋";

/// Process and action symbols
pub const SYMBOL_ACTION_LAUNCH: &str = "🚀";
pub const SYMBOL_ACTION_HOOK: &str = "🪝";

/// Content and data symbols
pub const SYMBOL_CONTENT_FILE: &str = "📄";

/// Tool symbols
pub const SYMBOL_TOOL_CONFIG: &str = "🔧";

/// Documentation symbols
pub const SYMBOL_DOC_NOTE: &str = "📝";
pub const SYMBOL_DOC_BOOK: &str = "📖";

/// Scope symbols
pub const SYMBOL_SCOPE_GLOBAL: &str = "🌐";
