use crate::error::KsResult;
use crate::keyboard::Keyboard;
use crate::keycodes::KeyCode;
use crate::layouts::LayoutId;
use crate::registry::LayoutRegistry;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Clone, Default)]
pub struct RegistryArgs {
    /// JSON layout file; the built-in layouts are used when omitted
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,
}

impl RegistryArgs {
    pub fn load(&self) -> KsResult<LayoutRegistry> {
        match &self.registry {
            Some(path) => LayoutRegistry::load_from_file(path),
            None => Ok(LayoutRegistry::builtin()),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BindingArgs {
    /// Layout the keys are picked on
    #[arg(short, long, default_value = "qwerty")]
    pub layout: String,

    /// Keys to bind, in action order; the first one is the base
    #[arg(short, long, value_delimiter = ',', default_value = "W,A,S,D")]
    pub keys: Vec<KeyCode>,

    /// Re-anchor the same shape at another base key
    #[arg(short, long)]
    pub base: Option<KeyCode>,
}

impl Default for BindingArgs {
    fn default() -> Self {
        Self {
            layout: "qwerty".to_string(),
            keys: vec![KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D],
            base: None,
        }
    }
}

impl BindingArgs {
    /// Builds the binding described by the arguments on `registry`.
    pub fn build(&self, registry: Arc<LayoutRegistry>) -> KsResult<Keyboard> {
        let layout = LayoutId::parse(&self.layout)?;
        let keyboard = Keyboard::with_registry(registry, layout, &self.keys)?;
        match self.base {
            Some(base) => Keyboard::derived(&keyboard, base),
            None => Ok(keyboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn default_binding_is_wasd() {
        let kb = BindingArgs::default()
            .build(Arc::new(LayoutRegistry::builtin()))
            .unwrap();
        assert_eq!(kb.resolved_keys(), vec![KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D]);
    }

    #[test]
    fn base_override_derives_binding() {
        let args = BindingArgs {
            base: Some(KeyCode::P),
            ..Default::default()
        };
        let kb = args.build(Arc::new(LayoutRegistry::builtin())).unwrap();
        assert_eq!(kb.resolve_key(0).unwrap(), KeyCode::P);
        assert_eq!(kb.resolve_key(1).unwrap(), KeyCode::L);
    }

    #[test]
    fn unknown_layout_name_is_unsupported() {
        let args = BindingArgs {
            layout: "bepo".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            args.build(Arc::new(LayoutRegistry::builtin())),
            Err(LayoutError::UnsupportedLayout(_))
        ));
    }

    #[test]
    fn missing_registry_file_is_io_error() {
        let args = RegistryArgs {
            registry: Some(PathBuf::from("/definitely/not/here.json")),
        };
        assert!(matches!(args.load(), Err(LayoutError::Io(_))));
    }
}
