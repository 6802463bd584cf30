// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 关键词（keyword）：用户登记的（关键词，站点域名）组合
/// - 排名日志（rank_log）：一次排名检测产生的不可变观测记录
/// - 搜索结果（organic_result）：提供商返回的单条自然搜索结果
pub mod keyword;
pub mod organic_result;
pub mod rank_log;
