/*
[INPUT]:  CLI subcommand arguments
[OUTPUT]: Non-TUI command implementations
[POS]:    CLI module root for the taskdeck binary
[UPDATE]: When adding new subcommands
*/

pub mod init;
