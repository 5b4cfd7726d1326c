// src/args.rs
use std::path::PathBuf;

use batch_filesize_domain::ScanSettings;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Default)]
#[command(
    name = "batch_filesize",
    version = crate::VERSION,
    about = "動画ファイルの識別子 (uid) とバイトサイズを CSV に書き出す"
)]
pub struct Args {
    /// 走査するルートディレクトリ（既定: カレントディレクトリ）
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// 対象拡張子（ドット付き、大文字小文字を区別、既定: .mp4）
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// 出力 CSV のパス（既定: log-size-<拡張子>.csv）
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 隠しファイル・隠しディレクトリも対象
    #[arg(long)]
    pub hidden: bool,

    /// シンボリックリンクを辿らない
    #[arg(long)]
    pub no_follow: bool,

    /// 検出したパスをソートしてから処理（既定は走査順）
    #[arg(long)]
    pub sort: bool,

    /// 進捗行 (NNNN:NNNN) を表示しない
    #[arg(short, long)]
    pub quiet: bool,

    /// 設定ファイル (.json / .yaml / .yml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// ログを詳細化 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Settings given on the command line. Flags that were not passed stay unset so
    /// that a config file can still provide them.
    pub fn settings(&self) -> ScanSettings {
        ScanSettings {
            root: self.root.clone(),
            extension: self.ext.clone(),
            output: self.output.clone(),
            include_hidden: self.hidden.then_some(true),
            follow_links: self.no_follow.then_some(false),
            sort: self.sort.then_some(true),
            quiet: self.quiet.then_some(true),
        }
    }
}
