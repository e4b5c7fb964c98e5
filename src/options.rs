use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

const TRUE: &str = "True";
const FALSE: &str = "False";

/// Options and positional arguments split out of a raw argument list.
///
/// Options are kept as raw strings; flags hold `"True"` or `"False"`.
/// Every lookup through [`Options::get`] marks the name as consulted so
/// [`Options::unused_names`] can report options nothing asked for.
#[derive(Debug, Default)]
pub struct Options {
    options: HashMap<String, String>,
    args: Vec<String>,
    used_names: RefCell<BTreeSet<String>>,
}

impl Options {
    pub fn from_args<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = HashMap::new();
        let mut args = Vec::new();

        for arg in argv {
            let arg = arg.as_ref();
            match arg_to_name_value(arg) {
                Some((name, value)) => {
                    options.insert(name.to_string(), value.to_string());
                }
                None => args.push(arg.to_string()),
            }
        }

        Options {
            options,
            args,
            used_names: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn get<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.used_names.borrow_mut().insert(name.to_string());
        self.options.get(name).map(String::as_str).unwrap_or(default)
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let default = if default { TRUE } else { FALSE };
        self.get(name, default) == TRUE
    }

    /// Like [`Options::get`] without a default.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.used_names.borrow_mut().insert(name.to_string());
        self.options.get(name).map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn project_name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn dependencies(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    /// Supplied option names that were never looked up, sorted.
    pub fn unused_names(&self) -> Vec<String> {
        let used = self.used_names.borrow();
        let mut unused: Vec<String> = self
            .options
            .keys()
            .filter(|name| !used.contains(*name))
            .cloned()
            .collect();
        unused.sort();
        unused
    }
}

/// Classifies one token as `--k=v`, `--no-k`, `--k`, or positional (`None`).
fn arg_to_name_value(arg: &str) -> Option<(&str, &str)> {
    let body = arg.strip_prefix("--")?;

    if let Some((name, value)) = body.split_once('=') {
        if name.is_empty() || value.is_empty() {
            return None;
        }
        return Some((name, value));
    }

    if let Some(name) = body.strip_prefix("no-") {
        if !name.is_empty() {
            return Some((name, FALSE));
        }
    }

    if body.is_empty() {
        return None;
    }
    Some((body, TRUE))
}
