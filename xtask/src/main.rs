// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Developer automation for the IEC case tracker workspace.
//!
//! - `cargo xtask ci` runs lint, build, test and the migration check
//! - `cargo xtask verify-migrations` applies the embedded `SQLite`
//!   migrations to a scratch database and checks the resulting schema

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::collections::{BTreeMap, BTreeSet};
use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

/// Tables and the columns the persistence layer reads from each.
const EXPECTED_SCHEMA: &[(&str, &[&str])] = &[
    (
        "users",
        &[
            "user_id",
            "username",
            "display_name",
            "designation",
            "role",
            "location",
            "is_active",
        ],
    ),
    (
        "iec_records",
        &[
            "case_id",
            "reference",
            "date_created",
            "date_received",
            "complainant",
            "respondent",
            "charge",
            "remarks",
            "due_date",
            "status",
            "created_by",
            "assigned_to",
        ],
    ),
    (
        "initial_evaluation_reports",
        &[
            "case_id",
            "submitted_by",
            "submitted_on",
            "director_approval_date",
            "remarks",
        ],
    ),
    (
        "pre_charge_investigations",
        &[
            "case_id",
            "precharge_no",
            "notice_pci_submitted_by",
            "notice_pci_submitted_on",
            "notice_pci_respondent_received_on",
            "notice_pci_remarks",
            "comment_counter_affidavit_received_on",
            "comment_counter_affidavit_remarks",
            "pci_report_submitted_by",
            "pci_report_submitted_on",
            "pci_report_remarks",
        ],
    ),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, migrations)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate an lcov coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Lint formatting, clippy and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Format the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run all tests
    #[command(visible_alias = "t")]
    Test,

    /// Apply the `SQLite` migrations to a scratch database and check the schema
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets"]),
            Self::Check => run_cargo(&["check", "--all-targets"]),
            Self::Coverage => run_cargo(&[
                "llvm-cov",
                "--workspace",
                "--lcov",
                "--output-path",
                "target/lcov.info",
            ]),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(&["fmt", "--all", "--check"]),
            Self::FixClippy => run_cargo(&[
                "clippy",
                "--all-targets",
                "--fix",
                "--allow-dirty",
                "--allow-staged",
            ]),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::Test => test(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    run_cargo(&["build", "--all-targets"])?;
    test()?;
    verify_migrations()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    run_cargo_nightly(&["fmt", "--all", "--check"])
}

fn lint_clippy() -> Result<()> {
    run_cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
}

/// Builds docs for each default workspace member with docs.rs flags.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd("cargo", ["doc", "--no-deps", "--package", &package.name])
            .env_remove("CARGO")
            .env("RUSTUP_TOOLCHAIN", "nightly")
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test", "--workspace", "--all-targets"])?;
    // doc tests are slow
    run_cargo(&["test", "--workspace", "--doc"])
}

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct ColumnInfo {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct ForeignKeyCheck {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Applies the embedded migrations to an in-memory database and checks that
/// every table and column the persistence layer relies on exists.
///
/// # Errors
///
/// Returns an error if a migration fails or a table or column is missing.
fn verify_migrations() -> Result<()> {
    tracing::info!("Applying SQLite migrations");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;

    let enforced: Vec<ForeignKeyCheck> = diesel::sql_query("PRAGMA foreign_keys")
        .load(&mut conn)
        .wrap_err("Failed to read foreign key setting")?;
    if enforced.first().is_none_or(|row| row.foreign_keys != 1) {
        return Err(eyre!("Foreign key enforcement is off after migrations"));
    }

    let schema: BTreeMap<String, BTreeSet<String>> = introspect_schema(&mut conn)?;
    compare_schema(&schema)?;

    tracing::info!("Migrations produce the expected schema");
    Ok(())
}

fn introspect_schema(conn: &mut SqliteConnection) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations'",
    )
    .load(conn)
    .wrap_err("Failed to list tables")?;

    let mut schema: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for table in tables {
        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("SELECT name FROM pragma_table_info('{}')", table.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read columns of {}", table.name))?;
        schema.insert(
            table.name,
            columns.into_iter().map(|column| column.name).collect(),
        );
    }

    Ok(schema)
}

fn compare_schema(schema: &BTreeMap<String, BTreeSet<String>>) -> Result<()> {
    let mut problems: Vec<String> = Vec::new();

    for (table, columns) in EXPECTED_SCHEMA {
        let Some(actual) = schema.get(*table) else {
            problems.push(format!("missing table {table}"));
            continue;
        };
        for column in *columns {
            if !actual.contains(*column) {
                problems.push(format!("missing column {table}.{column}"));
            }
        }
    }

    for table in schema.keys() {
        if !EXPECTED_SCHEMA.iter().any(|(name, _)| name == table) {
            tracing::warn!("Table {table} is not read by the persistence layer");
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(eyre!("Schema check failed: {}", problems.join("; ")))
    }
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // CARGO is set because we run as a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
