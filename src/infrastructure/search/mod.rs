// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索基础设施模块
///
/// 搜索结果提供商的HTTP客户端实现
pub mod serpapi;

pub use serpapi::SerpApiClient;
