// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::{
    parsers::parse_positive_u64,
    value_enum::{CliRangeFormat, CliStrategy},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "gen_ranges",
    version = crate::VERSION,
    about = "非重複ランダム区間の生成/JSON整形/JSON比較ツール",
    group(
        clap::ArgGroup::new("tool_mode")
            .args(&["beautify", "compare"])
            .multiple(false)
    )
)]
pub struct Args {
    /// 生成範囲の下限（この値を含む）
    #[arg(long, default_value_t = 18_908_893, help_heading = "区間生成")]
    pub start: u64,

    /// 生成範囲の上限（この値を含む）
    #[arg(long, default_value_t = 20_000_000, help_heading = "区間生成")]
    pub end: u64,

    /// 各区間が占める位置数（1以上）
    #[arg(long, default_value_t = 100, value_parser = parse_positive_u64, help_heading = "区間生成")]
    pub length: u64,

    /// 生成する区間の個数
    #[arg(long, default_value_t = 20, help_heading = "区間生成")]
    pub count: u64,

    /// サンプリング戦略 (gaps: 一回走査で一様配置, rejection: 旧来の棄却法)
    #[arg(long, value_enum, default_value = "gaps", help_heading = "区間生成")]
    pub strategy: CliStrategy,

    /// 乱数シード（指定すると結果が再現可能）
    #[arg(long, help_heading = "区間生成")]
    pub seed: Option<u64>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliRangeFormat,

    /// 生成結果の出力先ファイル
    #[arg(long, default_value = "range.txt", value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: PathBuf,

    /// 整形: JSON を読み込み、整形して保存
    #[arg(long, num_args = 2, value_names = ["INPUT", "OUTPUT"], value_hint = ValueHint::FilePath, help_heading = "JSONユーティリティ")]
    pub beautify: Option<Vec<PathBuf>>,

    /// 比較: 2つの JSON（トップレベルはリスト）を比較表示
    #[arg(long, num_args = 2, value_names = ["FILE1", "FILE2"], value_hint = ValueHint::FilePath, help_heading = "JSONユーティリティ")]
    pub compare: Option<Vec<PathBuf>>,
}
