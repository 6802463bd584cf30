// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

use crate::domain::models::organic_result::OrganicResult;

/// 结果URL的判定依据
///
/// URL解析成功时按主机名比较，解析失败时退化为对原始字符串的
/// 子串包含判断（宽松路径，接受已知的误报风险）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMatch {
    /// 成功提取的主机名（已小写）
    ParsedHost(String),
    /// 无法解析，保留规范化后的原始字符串
    RawFallback(String),
}

/// 规范化域名字符串
///
/// 去除首尾空白、转小写、剥离一个 `http://`/`https://` 前缀、
/// 剥离恰好一个尾部 `/`
pub fn normalize_domain(raw: &str) -> String {
    let mut s = raw.trim().to_lowercase();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = s.strip_prefix(scheme) {
            s = rest.to_string();
            break;
        }
    }
    if s.ends_with('/') {
        s.truncate(s.len() - 1);
    }
    s
}

/// 对结果URL做解析分类
///
/// 无scheme时先补 `https://` 再解析；解析失败不报错，降级为原始字符串
pub fn classify(result_url: &str) -> HostMatch {
    let trimmed = result_url.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match Url::parse(&candidate) {
        Ok(url) => match url.host_str() {
            Some(host) => HostMatch::ParsedHost(host.to_lowercase()),
            None => HostMatch::RawFallback(normalize_domain(result_url)),
        },
        Err(_) => HostMatch::RawFallback(normalize_domain(result_url)),
    }
}

/// 判断结果URL是否属于目标域名
///
/// 主机名完全相等或为其子域名（以 `"." + 目标域名` 结尾）时命中，
/// 拒绝 `notexample.com` 这类偶然的后缀重合。解析失败的URL退化为
/// 子串包含判断。纯函数，从不panic。
///
/// # 参数
///
/// * `result_url` - 提供商返回的结果URL，可能畸形
/// * `target_domain` - 用户输入的目标域名，可能带scheme、尾部斜杠或大小写混杂
pub fn matches(result_url: &str, target_domain: &str) -> bool {
    let target = normalize_domain(target_domain);

    match classify(result_url) {
        HostMatch::ParsedHost(host) => {
            let host = normalize_domain(&host);
            host == target || host.ends_with(&format!(".{}", target))
        }
        HostMatch::RawFallback(raw) => raw.contains(&target),
    }
}

/// 在有序结果列表中线性扫描首个命中
///
/// 结果已按提供商排名排序，首个命中即最低位置。
/// 全部未命中时返回 `None`（圏外）。
pub fn rank_of<'a>(results: &'a [OrganicResult], target_domain: &str) -> Option<&'a OrganicResult> {
    results
        .iter()
        .find(|entry| matches(&entry.link, target_domain))
}
