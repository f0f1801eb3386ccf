use crate::error::ChainParamsError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Value, ValueKind};
use std::collections::BTreeMap;

pub const DEFAULT_CONFIG_FILE: &str = "levcoin.toml";
const ENV_PREFIX: &str = "LVC";

/// Options that may be given more than once; every occurrence is kept.
const MULTI_VALUE_ARGS: [&str; 1] = ["vbparams"];

/// Startup configuration: config file, `LVC_*` environment and command line,
/// in increasing order of precedence. Passed explicitly to everything that
/// reads node options.
#[derive(Debug, Clone, Default)]
pub struct NodeArgs {
    settings: Config,
}

impl NodeArgs {
    /// Builds from `-key[=value]` style arguments (program name excluded)
    /// alone, without reading a config file or the environment.
    pub fn parse<I, S>(args: I) -> Result<Self, ChainParamsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        with_command_line(Config::builder(), parse_command_line(args)?)
    }

    /// Builds from `-key[=value]` style arguments layered over the config
    /// file and environment. A file named with `-conf` must exist; the
    /// default one is optional.
    pub fn load<I, S>(args: I) -> Result<Self, ChainParamsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cli = parse_command_line(args)?;

        let conf_file = match cli.get("conf").and_then(|values| values.last()) {
            Some(Some(path)) => File::new(path, FileFormat::Toml).required(true),
            Some(None) => {
                return Err(ConfigError::Message("-conf requires a file path".to_string()).into());
            }
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let builder = Config::builder().add_source(conf_file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("vbparams"),
        );
        with_command_line(builder, cli)
    }

    /// Builds from the process arguments, config file and environment.
    pub fn from_env() -> Result<Self, ChainParamsError> {
        Self::load(std::env::args().skip(1))
    }

    pub fn is_arg_set(&self, name: &str) -> bool {
        !matches!(self.settings.get_string(name), Err(ConfigError::NotFound(_)))
    }

    /// Integer option; `Ok(None)` when unset. A value that is present but not
    /// a decimal integer is an error, including a bare `-name` flag.
    pub fn get_int_arg(&self, name: &'static str) -> Result<Option<i64>, ChainParamsError> {
        let value = match self.settings.get::<Value>(name) {
            Ok(value) => value,
            Err(ConfigError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let text = match value.kind {
            ValueKind::I64(v) => return Ok(Some(v)),
            ValueKind::I128(v) => v.to_string(),
            ValueKind::String(ref s) => s.clone(),
            _ => value.to_string(),
        };
        text.trim()
            .parse()
            .map(Some)
            .map_err(|_| ChainParamsError::InvalidIntegerOverride {
                field: name,
                value: text,
                reason: "not an integer",
            })
    }

    /// Every value of a repeatable option, in the order given.
    pub fn get_args(&self, name: &str) -> Result<Vec<String>, ChainParamsError> {
        match self.settings.get_array(name) {
            Ok(values) => values
                .into_iter()
                .map(|v| v.into_string().map_err(ChainParamsError::from))
                .collect(),
            Err(ConfigError::NotFound(_)) => Ok(Vec::new()),
            Err(_) => Ok(vec![self.settings.get_string(name)?]),
        }
    }

    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        self.settings.get_bool(name).unwrap_or(default)
    }

    /// Network name picked by `-regtest`, `-testnet` or `-chain=<name>`;
    /// `main` when none is given. The name itself is validated on selection.
    pub fn chain_name(&self) -> Result<String, ChainParamsError> {
        let regtest = self.get_bool_arg("regtest", false);
        let testnet = self.get_bool_arg("testnet", false);
        let chain = match self.settings.get_string("chain") {
            Ok(name) => Some(name),
            Err(ConfigError::NotFound(_)) => None,
            Err(e) => return Err(e.into()),
        };

        let selected = [regtest, testnet, chain.is_some()].iter().filter(|s| **s).count();
        if selected > 1 {
            return Err(ChainParamsError::ConflictingChainSelection);
        }

        Ok(if regtest {
            "regtest".to_string()
        } else if testnet {
            "test".to_string()
        } else {
            chain.unwrap_or_else(|| "main".to_string())
        })
    }
}

type RawArgs = BTreeMap<String, Vec<Option<String>>>;

fn with_command_line(mut builder: ConfigBuilder<DefaultState>, cli: RawArgs) -> Result<NodeArgs, ChainParamsError> {
    for (key, values) in cli {
        if MULTI_VALUE_ARGS.contains(&key.as_str()) {
            let list: Vec<String> = values.into_iter().map(|v| v.unwrap_or_default()).collect();
            builder = builder.set_override(key, list)?;
        } else {
            builder = match values.into_iter().last().flatten() {
                Some(value) => builder.set_override(key, value)?,
                None => builder.set_override(key, true)?,
            };
        }
    }
    Ok(NodeArgs { settings: builder.build()? })
}

fn parse_command_line<I, S>(args: I) -> Result<RawArgs, ChainParamsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: RawArgs = BTreeMap::new();
    for arg in args {
        let arg = arg.as_ref();
        let stripped = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .ok_or_else(|| ConfigError::Message(format!("Command line contains unexpected token '{}'", arg)))?;
        let (key, value) = match stripped.split_once('=') {
            Some((k, v)) => (k, Some(v.to_string())),
            None => (stripped, None),
        };
        if key.is_empty() {
            return Err(ConfigError::Message(format!("Command line contains unexpected token '{}'", arg)).into());
        }
        out.entry(key.to_lowercase()).or_default().push(value);
    }
    Ok(out)
}
