//! # Name Filter Module / 名称过滤模块
//!
//! This module decides, from two lists of qualified-name prefixes, whether a
//! registered test runs. Entries match by prefix so `"domain"` selects every
//! test in that domain while `"domain::name"` selects exactly one; the
//! ignore list always wins over the include list.
//!
//! 此模块根据两组限定名前缀列表决定已注册的测试是否运行。
//! 条目按前缀匹配：`"domain"` 选中该 domain 中的所有测试，
//! `"domain::name"` 恰好选中一个；ignore 列表始终优先于 include 列表。

/// The include and ignore prefix lists derived from external input.
/// An empty include list means "no restriction": everything not ignored runs.
///
/// 从外部输入得到的 include 和 ignore 前缀列表。
/// 空的 include 列表表示“无限制”：所有未被忽略的测试都会运行。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterLists {
    include: Vec<String>,
    ignore: Vec<String>,
}

impl FilterLists {
    /// Builds filter lists from explicit entry collections.
    pub fn new(include: Vec<String>, ignore: Vec<String>) -> Self {
        Self { include, ignore }
    }

    /// Builds filter lists from the two optional comma-separated strings the
    /// process entry point supplies. Blank entries are dropped, surrounding
    /// whitespace is trimmed.
    ///
    /// 根据进程入口提供的两个可选逗号分隔字符串构建过滤列表。
    /// 空白条目被丢弃，条目两侧的空白被去除。
    pub fn from_comma_lists(include: Option<&str>, ignore: Option<&str>) -> Self {
        Self {
            include: split_comma_list(include),
            ignore: split_comma_list(ignore),
        }
    }

    /// Decides whether the test with the given qualified name runs.
    ///
    /// A name matching any ignore entry is skipped entirely, even if an
    /// include entry also matches it. Otherwise the name runs if the include
    /// list is empty or any include entry matches.
    ///
    /// 决定具有给定限定名的测试是否运行。
    /// 匹配任一 ignore 条目的名称会被完全跳过，即使 include 条目也匹配它。
    /// 否则，当 include 列表为空或任一 include 条目匹配时，该测试运行。
    pub fn selects(&self, qualified_name: &str) -> bool {
        if matches_any(&self.ignore, qualified_name) {
            return false;
        }
        self.include.is_empty() || matches_any(&self.include, qualified_name)
    }

    /// Checks whether neither list has any entries.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.ignore.is_empty()
    }
}

/// Prefix rule: an entry matches if it is a prefix of the qualified name.
fn matches_any(entries: &[String], qualified_name: &str) -> bool {
    entries
        .iter()
        .any(|entry| qualified_name.starts_with(entry.as_str()))
}

fn split_comma_list(list: Option<&str>) -> Vec<String> {
    list.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
