// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索模块
///
/// 定义搜索结果提供商的抽象接口
pub mod provider;

pub use provider::{SearchError, SerpProvider};
