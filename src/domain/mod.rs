// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：关键词、排名日志等核心业务实体
/// - 域名匹配（matcher）：判断搜索结果URL是否属于被跟踪站点
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 搜索（search）：搜索结果提供商抽象接口
///
/// 领域层是系统的核心，不依赖于任何外部实现，
/// 体现了纯粹的业务逻辑和业务规则。
pub mod matcher;
pub mod models;
pub mod repositories;
pub mod search;
