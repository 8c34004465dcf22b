use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{resolve_source_kind, validate_input_path, Cli};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionRequest;
use crate::service::config_service::ConfigService;
use crate::utils::utils::{format_file_size, setup_logging};

pub fn process_args(args: Vec<String>) -> io::Result<Vec<PathBuf>> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<Vec<PathBuf>> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;
    let request = build_request(&cli)?;

    let facade = ConversionFacade::new(&config);
    let written = facade.try_execute(&request)?;

    for path in &written {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        println!("已產生：{}（{}）", path.display(), format_file_size(size));
    }
    Ok(written)
}

/// 將命令列參數轉為單次轉換請求
pub fn build_request(cli: &Cli) -> io::Result<ConversionRequest> {
    let source_kind = resolve_source_kind(cli)?;
    let desired_output_name = cli
        .output
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    Ok(ConversionRequest {
        source_path: cli.input.clone(),
        source_kind,
        target_kind: cli.to,
        desired_output_name,
    })
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_input_path(&self.cli.input)?;
        // clap 已檢查範圍，此處防止直接建構 Cli 時繞過
        if !(1..=100).contains(&self.cli.jpeg_quality) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("JPEG 品質必須介於 1 到 100，收到 {}", self.cli.jpeg_quality)
            ));
        }
        resolve_source_kind(&self.cli)?;

        Ok(AppConfig {
            dpi: self.cli.dpi,
            jpeg_quality: self.cli.jpeg_quality,
            pdfium_lib: self.cli.pdfium_lib.clone(),
            office_bin: self.cli.office_bin.clone(),
            no_progress: self.cli.no_progress,
            log_level: self.cli.log_level.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::models::conversion::{SourceKind, TargetKind};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("file_converter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn adapter_copies_collaborator_settings() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.pdf");
        fs::write(&input, b"stub").unwrap();
        let input = input.to_string_lossy().to_string();
        let cli = parse(&[&input, "--to", "png", "--dpi", "300", "--office-bin", "/opt/lo/soffice", "--no-progress"]);

        let config = CliConfigAdapter::new(cli).get_config().unwrap();

        assert_eq!(config.dpi, 300);
        assert_eq!(config.office_bin, "/opt/lo/soffice");
        assert!(config.no_progress);
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn adapter_rejects_missing_input() {
        let cli = parse(&["/no/such/dir/photo.png", "--to", "jpg"]);
        let err = CliConfigAdapter::new(cli).get_config().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn adapter_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.xyz");
        fs::write(&input, b"stub").unwrap();
        let cli = parse(&[&input.to_string_lossy(), "--to", "pdf"]);

        let err = CliConfigAdapter::new(cli).get_config().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn request_uses_trimmed_output_name() {
        let cli = parse(&["photo.png", "--to", "gif", "-o", "  small  "]);
        let request = build_request(&cli).unwrap();
        assert_eq!(request.source_kind, SourceKind::Png);
        assert_eq!(request.target_kind, TargetKind::Gif);
        assert_eq!(request.desired_output_name.as_deref(), Some("small"));

        let blank = parse(&["photo.png", "--to", "gif", "-o", "   "]);
        assert!(build_request(&blank).unwrap().desired_output_name.is_none());
    }
}
