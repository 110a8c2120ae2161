use anyhow::{Context, Result, bail};
use bilingual_pdf_config::Config;
use bilingual_pdf_engine::{
    Block, FileTranslator, GoogleTranslator, Labels, LanguagePair, PdfRenderer, align, extract,
    io, languages, naming, render, translate_blocks, translated_markdown,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "bilingual-pdf",
    version,
    about = "Generate a bilingual 2-column PDF from a markdown file",
    long_about = "Converts a markdown document into a side-by-side bilingual PDF with the \
                  source language in the left column and its translation in the right \
                  column. Defaults to French → Spanish."
)]
struct Cli {
    /// Markdown document to translate
    input: Option<PathBuf>,

    /// Source language code (default from config, else fr)
    #[arg(short, long)]
    source: Option<String>,

    /// Target language code (default from config, else es)
    #[arg(short, long)]
    target: Option<String>,

    /// Pre-translated markdown file to use instead of a translation service
    #[arg(long, value_name = "FILE.md")]
    translation: Option<PathBuf>,

    /// Output PDF file
    #[arg(short, long, value_name = "FILE.pdf")]
    output: Option<PathBuf>,

    /// Also save the generated HTML
    #[arg(long)]
    html: bool,

    /// Also save the translated markdown
    #[arg(long)]
    save_translation: bool,

    /// List supported language codes and exit
    #[arg(long)]
    list_languages: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// A validated invocation.
#[derive(Debug)]
struct Job {
    input: PathBuf,
    pair: LanguagePair,
    translation: Option<PathBuf>,
    output: Option<PathBuf>,
    save_html: bool,
    save_translation: bool,
}

impl Job {
    fn from_cli(cli: Cli, config: &Config) -> Result<Self> {
        let Some(input) = cli.input else {
            bail!("input markdown file is required (use --help for usage)");
        };
        require_extension(&input, "md", "input file")?;
        if !input.exists() {
            bail!("input file not found: {}", input.display());
        }
        if let Some(translation) = &cli.translation {
            require_extension(translation, "md", "--translation file")?;
        }
        if let Some(output) = &cli.output {
            require_extension(output, "pdf", "--output file")?;
        }

        let source = cli.source.unwrap_or_else(|| config.source_lang.clone());
        let target = cli.target.unwrap_or_else(|| config.target_lang.clone());
        languages::validate(&source).context("invalid source language")?;
        languages::validate(&target).context("invalid target language")?;

        Ok(Self {
            input,
            pair: LanguagePair::new(source, target),
            translation: cli.translation,
            output: cli.output,
            save_html: cli.html,
            save_translation: cli.save_translation,
        })
    }

    fn warn(&self) {
        if self.pair.is_same() {
            log::warn!(
                "source and target languages are the same ({})",
                self.pair.source
            );
        }
        if self.translation.is_some() && self.save_translation {
            log::warn!("--save-translation is ignored when --translation is provided");
        }
    }
}

fn require_extension(path: &Path, ext: &str, what: &str) -> Result<()> {
    let actual = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if actual != ext {
        bail!("{what} must have .{ext} extension, got {:?}", path.display().to_string());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.list_languages {
        print_languages();
        return Ok(());
    }

    let config = Config::load_or_default(cli.config.as_deref()).context("loading config")?;
    log::debug!("config: {config:?}");

    let job = Job::from_cli(cli, &config)?;
    job.warn();
    run(&job, &config)
}

fn print_languages() {
    println!("{:<6}Language", "Code");
    println!("{:<6}--------", "----");
    for lang in languages::supported() {
        println!("{:<6}{}", lang.code, lang.name);
    }
}

fn run(job: &Job, config: &Config) -> Result<()> {
    // 1. Read and extract
    let bytes = io::read_file(&job.input).context("reading input file")?;
    let blocks = extract(&bytes).context("parsing markdown")?;
    if blocks.is_empty() {
        log::warn!("input file contains no parseable blocks");
    }
    log::info!("{}: {} blocks", job.input.display(), blocks.len());

    // 2. Translate
    let translated = translate_all(job, config, &blocks)?;

    // 3. Translated markdown
    if job.save_translation && job.translation.is_none() {
        let path = naming::translation_output(&job.input, &job.pair);
        io::write_file(&path, translated_markdown(&blocks, &translated))
            .context("saving translation")?;
        log::info!("Saved translation: {}", path.display());
    }

    // 4. HTML
    let alignment = align(&blocks, &translated);
    let html =
        render(&Labels::for_pair(&job.pair), &alignment.pairs).context("rendering HTML")?;

    if job.save_html {
        let path = naming::html_output(&job.input, &job.pair, job.output.as_deref());
        io::write_file(&path, &html).context("saving HTML")?;
        log::info!("Saved HTML: {}", path.display());
    }

    // 5. PDF
    let pdf_path = naming::pdf_output(&job.input, &job.pair, job.output.as_deref());
    let renderer = PdfRenderer::locate(config.browser.as_deref())?;
    renderer
        .render(&html, &pdf_path)
        .context("converting to PDF")?;
    log::info!("Saved PDF: {}", pdf_path.display());
    Ok(())
}

fn translate_all(job: &Job, config: &Config, blocks: &[Block]) -> Result<Vec<Block>> {
    if let Some(path) = &job.translation {
        return FileTranslator::new(path)
            .translated_blocks()
            .context("reading translation file");
    }

    let translator = GoogleTranslator::with_settings(
        config.translator.endpoint.clone(),
        Duration::from_millis(config.translator.delay_ms),
    )?;
    log::info!("Translating {} → {}", job.pair.source, job.pair.target);
    translate_blocks(blocks, &translator, &job.pair).context("translating")
}
