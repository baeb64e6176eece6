/// Model ID constants
pub mod models {
    // Google/Gemini models
    pub mod google {
        pub const DEFAULT_MODEL: &str = GEMINI_2_5_FLASH;
        pub const SUPPORTED_MODELS: &[&str] =
            &[GEMINI_2_5_FLASH, GEMINI_2_5_PRO, GEMINI_2_5_FLASH_LITE];

        pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
        pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";
        pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";
    }
}

pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Environment variables consulted for the Gemini API key
pub mod env {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
}

pub mod defaults {
    pub const DEFAULT_API_KEY_ENV: &str = super::env::GEMINI_API_KEY;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_USER_AGENT: &str = concat!("flowgen/", env!("CARGO_PKG_VERSION"));
}

/// Output file naming and placement
pub mod output {
    pub const FILE_PREFIX: &str = "n8n-workflow-";
    pub const FILE_EXTENSION: &str = "json";
    pub const APP_DIR_NAME: &str = "flowgen";
    pub const WORKFLOWS_DIR_NAME: &str = "generated-workflows";
}

pub mod config_files {
    pub const CONFIG_FILE_NAME: &str = "flowgen.toml";
    pub const CONFIG_DIR_NAME: &str = ".flowgen";
    pub const DOTENV_FILE_NAME: &str = ".env";
}

/// Host node identity
pub mod node {
    pub const DISPLAY_NAME: &str = "Workflow Generator (AI)";
    pub const NAME: &str = "workflowGeneratorAi";
    pub const ICON: &str = "fa:magic";
    pub const GROUP: &str = "transform";
    pub const VERSION: u32 = 1;
    pub const DESCRIPTION: &str = "Generates an n8n workflow from a text prompt using an LLM.";
    pub const CONNECTION_MAIN: &str = "main";
    pub const PROMPT_PARAMETER: &str = "prompt";
}
