// CLASSIFICATION: COMMUNITY
// Filename: posixctl.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Command-line front end for the posixkit facade.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use posixkit::{AccessMode, Capabilities, Gid, Mode, Pid, Posix, PosixError, Signal, Uid};

#[derive(Parser)]
#[command(about = "Query and drive POSIX process primitives")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Real and effective credentials plus supplementary groups
    Id,
    /// Process, parent, group and session IDs
    Proc {
        #[arg(long, default_value = "0")]
        pid: Pid,
    },
    /// Login name on the controlling terminal
    Login,
    /// Look up a user by name or numeric ID
    User { who: String },
    /// Look up a group by name or numeric ID
    Group { which: String },
    /// Resource limits
    Limits,
    /// CPU times in clock ticks
    Times,
    /// Host identification
    Uname,
    /// Current working directory
    Cwd,
    /// Terminal information for a descriptor
    Tty {
        #[arg(long, default_value = "0")]
        fd: i32,
    },
    /// Check accessibility of a path (mode letters: r, w, x, f)
    Access {
        path: PathBuf,
        #[arg(long, default_value = "f")]
        mode: String,
    },
    /// Create a named pipe
    Mkfifo {
        path: PathBuf,
        #[arg(long, default_value = "644", value_parser = parse_octal)]
        mode: Mode,
    },
    /// Send a signal (0 probes only)
    Kill {
        pid: Pid,
        #[arg(long, default_value = "15")]
        signal: Signal,
    },
    /// Describe an error number
    Strerror { code: i32 },
    /// Guarded primitives available to this facade
    Caps,
}

#[derive(Debug, Serialize)]
struct Identity {
    uid: Uid,
    euid: Uid,
    gid: Gid,
    egid: Gid,
    groups: Vec<Gid>,
}

#[derive(Debug, Serialize)]
struct ProcessDescriptor {
    pid: Pid,
    /// Only known for the calling process.
    ppid: Option<Pid>,
    pgid: Option<Pid>,
    sid: Pid,
}

#[derive(Debug, Serialize)]
struct Terminal {
    fd: i32,
    isatty: bool,
    ttyname: Option<String>,
    ctermid: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Posix(#[from] PosixError),
    #[error("invalid access mode {0:?}; use letters from \"rwxf\"")]
    AccessMode(String),
    #[error("{0} is not accessible")]
    Denied(PathBuf),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_octal(s: &str) -> Result<Mode, String> {
    Mode::from_str_radix(s, 8).map_err(|e| format!("invalid octal mode {s:?}: {e}"))
}

fn emit<T: Serialize + std::fmt::Debug>(json: bool, value: &T) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{:#?}", value);
    }
    Ok(())
}

/// Scalar results print bare in text mode.
fn emit_scalar<T: Serialize>(json: bool, value: &T, text: impl fmt::Display) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let posix = Posix::new();
    let json = cli.json;
    match cli.cmd {
        Command::Id => {
            let id = Identity {
                uid: posix.getuid(),
                euid: posix.geteuid(),
                gid: posix.getgid(),
                egid: posix.getegid(),
                groups: posix.getgroups()?,
            };
            if json {
                emit(json, &id)?;
            } else {
                println!(
                    "uid={} euid={} gid={} egid={} groups={:?}",
                    id.uid, id.euid, id.gid, id.egid, id.groups
                );
            }
        }
        Command::Proc { pid } => {
            let own = posix.getpid();
            let target = if pid == 0 { own } else { pid };
            let desc = ProcessDescriptor {
                pid: target,
                ppid: (target == own).then(|| posix.getppid()),
                pgid: match posix.getpgid(pid) {
                    Ok(pgid) => Some(pgid),
                    Err(PosixError::Unsupported(_)) => None,
                    Err(e) => return Err(e.into()),
                },
                sid: posix.getsid(pid)?,
            };
            if json {
                emit(json, &desc)?;
            } else {
                println!(
                    "pid={} ppid={:?} pgid={:?} sid={}",
                    desc.pid, desc.ppid, desc.pgid, desc.sid
                );
            }
        }
        Command::Login => {
            let name = posix.getlogin()?;
            emit_scalar(json, &name, &name)?;
        }
        Command::User { who } => {
            let entry = match who.parse::<Uid>() {
                Ok(uid) => posix.getpwuid(uid)?,
                Err(_) => posix.getpwnam(&who)?,
            };
            emit(json, &entry)?;
        }
        Command::Group { which } => {
            let entry = match which.parse::<Gid>() {
                Ok(gid) => posix.getgrgid(gid)?,
                Err(_) => posix.getgrnam(&which)?,
            };
            emit(json, &entry)?;
        }
        Command::Limits => {
            let limits = posix.getrlimit()?;
            if json {
                emit(json, &limits)?;
            } else {
                for (name, limit) in limits.iter() {
                    println!("{:<12} soft={:?} hard={:?}", name, limit.soft, limit.hard);
                }
            }
        }
        Command::Times => emit(json, &posix.times()?)?,
        Command::Uname => emit(json, &posix.uname()?)?,
        Command::Cwd => {
            let cwd = posix.getcwd()?;
            emit_scalar(json, &cwd, cwd.display())?;
        }
        Command::Tty { fd } => {
            let term = Terminal {
                fd,
                isatty: posix.isatty(fd),
                ttyname: posix.ttyname(fd).ok(),
                ctermid: posix.ctermid(),
            };
            if json {
                emit(json, &term)?;
            } else {
                println!(
                    "fd={} isatty={} ttyname={} ctermid={}",
                    term.fd,
                    term.isatty,
                    term.ttyname.as_deref().unwrap_or("-"),
                    term.ctermid
                );
            }
        }
        Command::Access { path, mode } => {
            let mode = AccessMode::from_letters(&mode).ok_or(CliError::AccessMode(mode))?;
            if !posix.access(&path, mode) {
                return Err(CliError::Denied(path));
            }
            println!("{}: ok", path.display());
        }
        Command::Mkfifo { path, mode } => {
            posix.mkfifo(&path, mode)?;
            println!("created fifo {}", path.display());
        }
        Command::Kill { pid, signal } => {
            posix.kill(pid, signal)?;
            println!("sent signal {} to {}", signal, pid);
        }
        Command::Strerror { code } => {
            let msg = posix.strerror(code);
            emit_scalar(json, &msg, &msg)?;
        }
        Command::Caps => {
            let caps = posix.capabilities();
            if json {
                emit(json, &caps)?;
            } else {
                for (name, flag) in Capabilities::all().iter_names() {
                    let state = if caps.contains(flag) { "available" } else { "masked" };
                    println!("{:<12} {}", name.to_ascii_lowercase(), state);
                }
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
