use std::io;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責從配置適配器取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器，互動模式使用
#[derive(Default)]
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_uses_default_values() {
        let config = ConfigService::new(Box::new(DefaultConfigAdapter::new()))
            .get_config()
            .unwrap();
        assert_eq!(config.dpi, 200);
        assert_eq!(config.office_bin, "soffice");
        assert!(config.pdfium_lib.is_none());
    }

    #[test]
    fn default_adapter_matches_new() {
        let config = DefaultConfigAdapter::default().get_config().unwrap();
        assert_eq!(config, DefaultConfigAdapter::new().get_config().unwrap());
    }
}
