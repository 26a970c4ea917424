// ─── Launch Command Composer ───
// Merges user options, path clauses, the main-class clause and trailing
// program arguments into the argument vector handed to the process launcher.
//
// Emission order is fixed:
//   1. tokenized user options
//   2. --module-path <entries> --add-modules <modules>
//   3. -classpath <[outputDir<sep>]entries>
//   4. [--module] <module/class | class>
//   5. tokenized trailing arguments

use serde::Serialize;
use tracing::debug;

use super::classpath::{build_classpath, join_path_entries};
use super::path_mode::PathSelection;
use super::render::{render_args, render_command};
use super::tokenizer::{tokenize, tokenize_all};

/// The final ordered launch arguments. Does not include the executable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy/pasteable command line with `executable` in front.
    pub fn command_line(&self, executable: &str) -> String {
        render_command(executable, &self.0)
    }
}

/// Main class to launch, optionally inside a named module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainClass {
    pub class_name: String,
    pub module: Option<String>,
}

impl MainClass {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            module: None,
        }
    }

    pub fn in_module(class_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            module: Some(module.into()),
        }
    }

    /// `--module module/Class` for modular launches, the bare class otherwise.
    /// A class name already written as `module/Class` is not prefixed again.
    fn invocation(&self) -> Vec<String> {
        match &self.module {
            Some(module) => {
                let target = if self.class_name.contains('/') {
                    self.class_name.clone()
                } else {
                    format!("{}/{}", module, self.class_name)
                };
                vec!["--module".to_string(), target]
            }
            None => vec![self.class_name.clone()],
        }
    }
}

/// Everything the composer reads. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    pub user_options: &'a [String],
    pub selection: PathSelection,
    pub modulepath_entries: &'a [String],
    /// `None` under module-path still emits `--add-modules ""`.
    pub add_modules: Option<&'a str>,
    pub classpath_entries: &'a [String],
    pub output_dir: Option<&'a str>,
    pub main_class: Option<&'a MainClass>,
    pub trailing_args: Option<&'a str>,
}

/// Build the argument vector. Pure: identical input, identical output.
pub fn compose(input: &ComposeInput<'_>) -> ArgumentVector {
    let mut args = tokenize_all(input.user_options);

    if input.selection.use_module_path {
        args.push("--module-path".into());
        args.push(join_path_entries(input.modulepath_entries));
        args.push("--add-modules".into());
        args.push(input.add_modules.unwrap_or_default().to_string());
    }

    if input.selection.use_classpath {
        args.push("-classpath".into());
        args.push(build_classpath(
            input.classpath_entries,
            input.output_dir,
            input.selection.prefix_output_dir,
        ));
    }

    if let Some(main_class) = input.main_class {
        args.extend(main_class.invocation());
    }

    if let Some(trailing) = input.trailing_args {
        args.extend(tokenize(trailing));
    }

    debug!("Composed {} launch arguments: {}", args.len(), render_args(&args));
    ArgumentVector(args)
}
