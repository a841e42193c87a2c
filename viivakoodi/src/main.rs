use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use viivakoodilib::{decode, encode_payment, DeconstructResult, Payment, Value, ViivakoodiError};

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind}: {0}", kind = .0.kind())]
    Code(#[from] ViivakoodiError),

    #[error("{0}")]
    Usage(&'static str),
}

type Result<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "viivakoodi", version, about = "Кодирование и разбор virtuaaliviivakoodi")]
struct Cli {
    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<String>,

    /// Подробный лог в stderr (поверх RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Собрать код из полей
    Encode(EncodeArgs),
    /// Разобрать код на поля
    Decode {
        /// 54-значный код
        code: String,

        /// Вывод в JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// JSON с полями iban, reference, euro_amount, due_date ("-" для stdin)
    #[arg(short = 'i', long = "input", conflicts_with_all = ["iban", "reference", "amount", "due_date"])]
    input: Option<String>,

    #[arg(long, env = "VIIVAKOODI_IBAN")]
    iban: Option<String>,

    /// Национальная или RF-ссылка
    #[arg(long)]
    reference: Option<String>,

    /// Сумма в евро, точка как разделитель
    #[arg(long, value_parser = parse_amount)]
    amount: Option<Decimal>,

    /// Срок оплаты, YYYY-MM-DD
    #[arg(long = "due-date")]
    due_date: Option<String>,
}

fn parse_amount(s: &str) -> std::result::Result<Decimal, String> {
    Decimal::from_str_exact(s.trim()).map_err(|e| format!("not a decimal amount: {e}"))
}

impl EncodeArgs {
    fn into_payment(self) -> Result<Payment> {
        if let Some(path) = self.input {
            let reader: Box<dyn Read> = match path.as_str() {
                "-" => Box::new(io::stdin()),
                _ => Box::new(File::open(path)?),
            };
            return Ok(serde_json::from_reader(BufReader::new(reader))?);
        }

        match (self.iban, self.reference, self.amount) {
            (Some(iban), Some(reference), Some(amount)) => Ok(Payment {
                iban: Value::Text(iban),
                reference: Value::Text(reference),
                euro_amount: Value::Decimal(amount),
                due_date: self.due_date.map(Value::Text),
            }),
            _ => Err(CliError::Usage(
                "encode needs --input or all of --iban, --reference, --amount",
            )),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // повторная инициализация (в тестах) не ошибка
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn render(r: &DeconstructResult) -> String {
    let due = r
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".into());
    format!(
        "symbol: {}\niban: {}\nreference: {}\neuro_amount: {}\ndue_date: {}\n",
        r.symbol, r.iban, r.reference, r.euro_amount, due
    )
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Encode(args) => {
            let payment = args.into_payment()?;
            let code = encode_payment(&payment)?;
            Ok(format!("{code}\n"))
        }
        Command::Decode { code, json } => {
            let r = decode(code.trim())?;
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&r)?))
            } else {
                Ok(render(&r))
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = cli.output.clone();
    let text = run(cli).inspect_err(|e| tracing::error!(error = %e, "viivakoodi failed"))?;

    // writer
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    writer.write_all(text.as_bytes())?;
    writer.flush().map_err(CliError::from)
}
