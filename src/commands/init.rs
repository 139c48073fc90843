use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# article-metrics configuration

[lexicons]
# Stop-word lists are merged into one set
stop_words = [
    "resource/StopWords/StopWords_Auditor.txt",
    "resource/StopWords/StopWords_Currencies.txt",
    "resource/StopWords/StopWords_DatesandNumbers.txt",
    "resource/StopWords/StopWords_Generic.txt",
    "resource/StopWords/StopWords_GenericLong.txt",
    "resource/StopWords/StopWords_Geographic.txt",
    "resource/StopWords/StopWords_Names.txt",
]
positive_words = "resource/MasterDictionary/positive_words.txt"
negative_words = "resource/MasterDictionary/negative_words.txt"

[fetch]
timeout_secs = 30
max_elements_to_parse = 9000

[input]
url_column = "URL"

[output]
default_format = "csv"
# dump_text_dir = "articles"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
