// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ua-typeinfo - Inspect OPC UA type metadata
//!
//! Lists the builtin type table, decodes status codes and prints the layout
//! the type-table builder computes for an ad-hoc structure.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use colored::*;
use ua_types::{
    builtin_table, BuiltinType, DateTime, Engine, Guid, MemberDecl, Severity, StatusCode,
    TypeTableBuilder,
};

#[derive(Parser, Debug)]
#[command(name = "ua-typeinfo")]
#[command(version)]
#[command(about = "Inspect OPC UA builtin types, status codes and structure layouts")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the builtin type table
    Builtins {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Decode a status code given as hex, decimal or symbolic name
    Status {
        /// Code to look up (e.g. 0x80340000, BadNodeIdUnknown)
        #[arg(value_name = "CODE", required_unless_present = "list")]
        code: Option<String>,

        /// List every known code
        #[arg(long)]
        list: bool,

        /// Restrict --list to one severity: good, uncertain, bad
        #[arg(long, requires = "list")]
        severity: Option<String>,
    },

    /// Print the current time as ticks and in the protocol text form
    Now,

    /// Generate random GUIDs
    Guid {
        /// Number of GUIDs
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute the layout of a structure from member declarations
    Layout {
        /// Structure name
        name: String,

        /// Members as name:Type or name:Type[] (builtin types only)
        #[arg(value_name = "MEMBER", required = true)]
        members: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Builtins { json } => cmd_builtins(json),
        Commands::Status {
            code,
            list,
            severity,
        } => {
            if list {
                cmd_status_list(severity.as_deref())
            } else {
                let code = code.ok_or_else(|| anyhow!("missing status code"))?;
                cmd_status(&code)
            }
        }
        Commands::Now => cmd_now(),
        Commands::Guid { count, seed } => {
            cmd_guid(count, seed);
            Ok(())
        }
        Commands::Layout { name, members } => cmd_layout(&name, &members),
    }
}

fn cmd_builtins(json: bool) -> anyhow::Result<()> {
    if json {
        let rows: Vec<_> = builtin_table()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.type_id().as_numeric(),
                    "name": t.name(),
                    "mem_size": t.mem_size(),
                    "fixed_size": t.is_fixed_size(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", format!("{:>3}  {:<16} {:>6}  {}", "ID", "NAME", "SIZE", "FIXED").bold());
    for t in builtin_table() {
        let id = t.type_id().as_numeric().unwrap_or(0);
        let fixed = if t.is_fixed_size() {
            "yes".green()
        } else {
            "no".yellow()
        };
        println!("{:>3}  {:<16} {:>6}  {}", id, t.name(), t.mem_size(), fixed);
    }
    Ok(())
}

fn parse_code(text: &str) -> anyhow::Result<StatusCode> {
    let trimmed = text.trim();
    log::debug!("[typeinfo] parsing status code {:?}", trimmed);
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        let bits = u32::from_str_radix(hex, 16).with_context(|| format!("invalid hex: {}", text))?;
        return Ok(StatusCode(bits));
    }
    if let Ok(bits) = trimmed.parse::<u32>() {
        return Ok(StatusCode(bits));
    }
    StatusCode::from_name(trimmed).ok_or_else(|| anyhow!("unknown status code name: {}", text))
}

fn severity_label(code: StatusCode) -> ColoredString {
    let label = code.severity().to_string();
    match code.severity() {
        Severity::Good => label.green(),
        Severity::Uncertain => label.yellow(),
        Severity::Bad => label.red(),
    }
}

fn cmd_status(text: &str) -> anyhow::Result<()> {
    let code = parse_code(text)?;
    println!("{:<12} 0x{:08X}", "Code:", code.bits());
    println!("{:<12} {}", "Name:", code.name().unwrap_or("(unknown)").bold());
    println!("{:<12} {}", "Severity:", severity_label(code));
    if let Some(desc) = code.description() {
        println!("{:<12} {}", "Meaning:", desc);
    }
    let info = code.bits() & 0xFFFF;
    if info != 0 {
        println!("{:<12} 0x{:04X}", "Info bits:", info);
    }
    Ok(())
}

fn cmd_status_list(severity: Option<&str>) -> anyhow::Result<()> {
    let filter = match severity.map(str::to_ascii_lowercase).as_deref() {
        None => None,
        Some("good") => Some(Severity::Good),
        Some("uncertain") => Some(Severity::Uncertain),
        Some("bad") => Some(Severity::Bad),
        Some(other) => bail!("unknown severity: {}", other),
    };
    let mut count = 0;
    for code in StatusCode::all().filter(|c| filter.map_or(true, |s| c.severity() == s)) {
        println!(
            "0x{:08X}  {:<9}  {}",
            code.bits(),
            severity_label(code),
            code.name().unwrap_or_default()
        );
        count += 1;
    }
    eprintln!("{}", format!("{} codes", count).dimmed());
    Ok(())
}

fn cmd_now() -> anyhow::Result<()> {
    let now = DateTime::now();
    let text = now
        .to_ua_string(&Engine::system())
        .map_err(|e| anyhow!("formatting failed: {}", e))?;
    println!("{:<8} {}", "Ticks:", now.ticks());
    println!("{:<8} {}", "Unix:", now.to_unix());
    println!("{:<8} {}", "UA:", text);
    println!("{:<8} {}", "ISO:", now);
    Ok(())
}

fn cmd_guid(count: usize, seed: Option<u64>) {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    for _ in 0..count {
        println!("{}", Guid::random_with(&mut rng));
    }
}

fn parse_member(decl: &str) -> anyhow::Result<MemberDecl> {
    let (name, ty) = decl
        .split_once(':')
        .ok_or_else(|| anyhow!("member must be name:Type, got {}", decl))?;
    let (ty, is_array) = match ty.strip_suffix("[]") {
        Some(inner) => (inner, true),
        None => (ty, false),
    };
    let kind = BuiltinType::ALL
        .iter()
        .copied()
        .find(|k| k.name().eq_ignore_ascii_case(ty))
        .ok_or_else(|| anyhow!("unknown builtin type: {}", ty))?;
    log::debug!("[typeinfo] member {} -> {} (array: {})", name, kind.name(), is_array);
    let member = MemberDecl::builtin(name, kind);
    Ok(if is_array { member.array() } else { member })
}

fn cmd_layout(name: &str, members: &[String]) -> anyhow::Result<()> {
    let decls = members
        .iter()
        .map(|m| parse_member(m))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut builder = TypeTableBuilder::new(1);
    builder
        .add_structure(name, 1, decls)
        .map_err(|e| anyhow!("invalid structure: {}", e))?;
    let table = builder.build().map_err(|e| anyhow!("{}", e))?;
    log::debug!("[typeinfo] built layout table for {} ({} members)", name, members.len());
    let ty = table
        .by_name(name)
        .ok_or_else(|| anyhow!("structure {} missing from table", name))?;

    println!(
        "{} ({} bytes, {})",
        ty.name().bold(),
        ty.mem_size(),
        if ty.is_fixed_size() {
            "fixed-size".green()
        } else {
            "member walk".yellow()
        }
    );
    for m in ty.members() {
        let suffix = if m.is_array() { "[]" } else { "" };
        println!(
            "  {:>4}  {:<16} {}{}",
            m.offset(),
            m.name(),
            m.member_type().name(),
            suffix
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_forms() {
        let bad = StatusCode::BAD_INTERNAL_ERROR;
        assert_eq!(parse_code(&format!("0x{:08X}", bad.bits())).unwrap(), bad);
        assert_eq!(parse_code(&bad.bits().to_string()).unwrap(), bad);
        assert_eq!(parse_code("BadInternalError").unwrap(), bad);
        assert!(parse_code("NotACode").is_err());
    }

    #[test]
    fn test_parse_member() {
        assert!(parse_member("samples:Double[]").is_ok());
        assert!(parse_member("id:uint32").is_ok());
        assert!(parse_member("id").is_err());
        assert!(parse_member("id:Widget").is_err());
    }

    #[test]
    fn test_layout_command() {
        let members = vec!["flags:Byte".to_string(), "samples:Double[]".to_string()];
        assert!(cmd_layout("Reading", &members).is_ok());
        assert!(cmd_layout("Bad", &["x:Nope".to_string()]).is_err());
    }
}
