//! Global constants.

/// Crawl-related constants.
pub mod crawl {
    /// Directory names excluded by default.
    pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
        ".git",
        "__pycache__",
        "node_modules",
        "target",
        "venv",
        ".venv",
        "docs",
    ];

    /// File names excluded by default.
    pub const DEFAULT_EXCLUDE_FILES: &[&str] =
        &["setup.py", "requirements.txt", "Cargo.lock", "package-lock.json"];

    /// Extension suffixes excluded by default.
    pub const DEFAULT_EXCLUDE_EXTENSIONS: &[&str] = &[".pyc", ".pyo", ".pyd", ".rlib", ".o"];

    /// Name of the ignore file parsed for extra exclusion rules.
    pub const IGNORE_FILE_NAME: &str = ".gitignore";

    /// Default name of the bundle artifact.
    pub const DEFAULT_OUTPUT_FILE: &str = "all_code.txt";

    /// Default per-file size limit; larger files get a placeholder.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

    /// Bytes fed to the statistical encoding detector.
    pub const DETECTOR_CHUNK_SIZE: usize = 1024 * 1024;
}

/// LLM-related constants.
pub mod llm {
    /// Minimum length of a custom action string (exclusive).
    pub const MIN_ACTION_LEN: usize = 5;

    /// Sampling temperature used for all requests.
    pub const TEMPERATURE: f32 = 0.1;

    /// Max tokens requested from the Claude API.
    pub const CLAUDE_MAX_TOKENS: u32 = 4096;

    /// Max output tokens requested from the Gemini API.
    pub const GEMINI_MAX_OUTPUT_TOKENS: u32 = 8192;

    /// File the cleaned model reply is written to.
    pub const RESPONSE_FILE: &str = "response.md";
}
