//! Search command - one-shot lookup printed to stdout

use super::Context;
use crate::{
    CustfindError,
    cli::split_setting,
    config::OutputFormat,
    form::{FormController, SubmitOutcome, field::date_value},
    output,
    page::PageController,
    schema::{SchemaError, UiType},
    ui::{
        input::{DialoguerPrompter, FieldPrompter, fill_form},
        output::{Notifier, StdoutNotifier},
    },
};
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CustfindError>;

/// Form values collected from the command line
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    /// Extra `KEY=VALUE` pairs for custom schema fields
    pub fields: Vec<String>,
    pub format: Option<OutputFormat>,
    pub interactive: bool,
}

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A view was printed (table or the empty message)
    Printed,
    /// Required fields were blank; nothing was fetched
    MissingFields,
    /// The data source could not be read
    Failed,
}

impl SearchOutcome {
    /// Process exit code; empty results are a success
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Printed => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
            Self::MissingFields => ExitCode::from(2),
        }
    }
}

/// Copy command line values into the form
///
/// # Errors
/// Returns `CustfindError::InvalidInput` for malformed dates and `KEY=VALUE`
/// pairs, and `SchemaError::UnknownField` for keys the schema does not declare
pub fn apply_args(form: &mut FormController, args: &SearchArgs) -> Result<()> {
    let named = [
        ("firstName", &args.first_name),
        ("lastName", &args.last_name),
        ("dateOfBirth", &args.date_of_birth),
    ];
    let mut pairs: Vec<(String, String)> = named
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect();

    for setting in &args.fields {
        let (key, value) = split_setting(setting).ok_or_else(|| {
            CustfindError::InvalidInput(format!("Invalid field '{setting}'. Use KEY=VALUE"))
        })?;
        pairs.push((key.to_string(), value.to_string()));
    }

    for (key, value) in pairs {
        let field = form
            .schema()
            .field(&key)
            .ok_or_else(|| SchemaError::UnknownField(key.clone()))?;
        let value = if field.ui_type == UiType::Date && !value.trim().is_empty() {
            let date = date_value(&value);
            if date.is_empty() {
                return Err(CustfindError::InvalidInput(format!(
                    "Invalid date '{value}' for {key}. Use yyyy-mm-dd"
                )));
            }
            date
        } else {
            value
        };
        form.set_field(&key, value);
    }
    Ok(())
}

/// Run the search with an explicit prompter and notifier
///
/// # Errors
/// Returns an error if arguments are invalid, prompting fails or output
/// cannot be serialized
pub fn run(
    ctx: &Context,
    args: &SearchArgs,
    prompter: Option<&dyn FieldPrompter>,
    notifier: Arc<dyn Notifier>,
) -> Result<(SearchOutcome, String)> {
    let mut form = FormController::new(Arc::clone(&ctx.schema), Arc::clone(&notifier));
    apply_args(&mut form, args)?;

    if let Some(prompter) = prompter {
        fill_form(&mut form, prompter, true)?;
    }

    let mut page = PageController::new(Arc::clone(&ctx.source), notifier)?;
    if let SubmitOutcome::MissingFields(missing) = form.submit(&mut page) {
        tracing::debug!(?missing, "search not started");
        return Ok((SearchOutcome::MissingFields, String::new()));
    }
    page.wait();

    let view = page.view(&ctx.schema, &ctx.registry);
    let format = args.format.unwrap_or(ctx.config.output_format);
    let rendered = output::render(&view, format, ctx.quiet)?;
    let outcome = if view.is_error() {
        SearchOutcome::Failed
    } else {
        SearchOutcome::Printed
    };
    Ok((outcome, rendered))
}

/// Execute the search command
///
/// # Errors
/// Returns an error if arguments are invalid, prompting fails or output
/// cannot be serialized
pub fn execute(ctx: &Context, args: &SearchArgs) -> Result<SearchOutcome> {
    let notifier: Arc<dyn Notifier> = Arc::new(StdoutNotifier::new(ctx.quiet));
    let prompter = DialoguerPrompter::new();
    let prompter = args.interactive.then_some(&prompter as &dyn FieldPrompter);

    let (outcome, rendered) = run(ctx, args, prompter, notifier)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustfindConfig;
    use crate::form::MISSING_FIELDS_TITLE;
    use crate::page::{NO_RESULTS_TITLE, SEARCH_FAILED_TITLE, UNREACHABLE_MESSAGE};
    use crate::schema::{AccessorRegistry, SearchSchema};
    use crate::source::CustomerSource;
    use crate::testing::{FailingSource, RecordingNotifier, StaticSource, jane_doe};
    use crate::ui::output::Severity;

    fn context(source: impl CustomerSource + 'static, format: OutputFormat) -> Context {
        Context {
            config: CustfindConfig {
                output_format: format,
                ..CustfindConfig::default()
            },
            schema: Arc::new(SearchSchema::default()),
            registry: AccessorRegistry::default(),
            source: Arc::new(source),
            quiet: true,
        }
    }

    fn jane_args() -> SearchArgs {
        SearchArgs {
            first_name: Some("jane".to_string()),
            last_name: Some(" DOE ".to_string()),
            date_of_birth: Some("1990-05-01".to_string()),
            ..SearchArgs::default()
        }
    }

    #[test]
    fn test_search_prints_match() {
        let ctx = context(StaticSource(vec![jane_doe()]), OutputFormat::Csv);
        let notifier = Arc::new(RecordingNotifier::new());

        let (outcome, text) = run(&ctx, &jane_args(), None, notifier.clone()).unwrap();

        assert_eq!(outcome, SearchOutcome::Printed);
        assert!(text.contains("1,Jane Doe,1990-05-01,555-1111,jane@x.com"));
        assert!(notifier.toasts().is_empty());
    }

    #[test]
    fn test_empty_result_is_success() {
        let ctx = context(StaticSource(Vec::new()), OutputFormat::Json);
        let notifier = Arc::new(RecordingNotifier::new());

        let (outcome, text) = run(&ctx, &jane_args(), None, notifier.clone()).unwrap();

        assert_eq!(outcome, SearchOutcome::Printed);
        assert_eq!(outcome.exit_code(), ExitCode::SUCCESS);
        assert!(text.contains("\"empty\""));
        assert_eq!(notifier.toasts()[0].title, NO_RESULTS_TITLE);
    }

    #[test]
    fn test_fetch_failure_fails() {
        let ctx = context(FailingSource, OutputFormat::Json);
        let notifier = Arc::new(RecordingNotifier::new());

        let (outcome, text) = run(&ctx, &jane_args(), None, notifier.clone()).unwrap();

        assert_eq!(outcome, SearchOutcome::Failed);
        assert!(text.contains(UNREACHABLE_MESSAGE));
        let toast = &notifier.toasts()[0];
        assert_eq!(toast.title, SEARCH_FAILED_TITLE);
        assert_eq!(toast.severity, Severity::Destructive);
    }

    #[test]
    fn test_missing_fields_do_not_fetch() {
        let ctx = context(FailingSource, OutputFormat::Table);
        let notifier = Arc::new(RecordingNotifier::new());
        let args = SearchArgs {
            first_name: Some("Jane".to_string()),
            ..SearchArgs::default()
        };

        let (outcome, text) = run(&ctx, &args, None, notifier.clone()).unwrap();

        assert_eq!(outcome, SearchOutcome::MissingFields);
        assert!(text.is_empty());
        assert_eq!(notifier.toasts().len(), 1);
        assert_eq!(notifier.toasts()[0].title, MISSING_FIELDS_TITLE);
    }

    #[test]
    fn test_apply_args_rejects_bad_input() {
        let schema = Arc::new(SearchSchema::default());
        let mut form = FormController::new(schema, Arc::new(RecordingNotifier::new()));

        let bad_date = SearchArgs {
            date_of_birth: Some("05/01/1990".to_string()),
            ..SearchArgs::default()
        };
        assert!(matches!(
            apply_args(&mut form, &bad_date),
            Err(CustfindError::InvalidInput(_))
        ));

        let unknown = SearchArgs {
            fields: vec!["city=Oslo".to_string()],
            ..SearchArgs::default()
        };
        assert!(matches!(
            apply_args(&mut form, &unknown),
            Err(CustfindError::Schema(SchemaError::UnknownField(_)))
        ));

        let malformed = SearchArgs {
            fields: vec!["lastName".to_string()],
            ..SearchArgs::default()
        };
        assert!(apply_args(&mut form, &malformed).is_err());
    }

    #[test]
    fn test_apply_args_field_pairs() {
        let schema = Arc::new(SearchSchema::default());
        let mut form = FormController::new(schema, Arc::new(RecordingNotifier::new()));
        let args = SearchArgs {
            fields: vec!["lastName=Doe".to_string(), "dateOfBirth= 1990-05-01 ".to_string()],
            ..SearchArgs::default()
        };

        apply_args(&mut form, &args).unwrap();

        assert_eq!(form.value("lastName"), "Doe");
        assert_eq!(form.value("dateOfBirth"), "1990-05-01");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SearchOutcome::Failed.exit_code(), ExitCode::FAILURE);
        assert_eq!(SearchOutcome::MissingFields.exit_code(), ExitCode::from(2));
    }
}
