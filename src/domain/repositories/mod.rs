// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义数据访问的抽象接口，遵循依赖倒置原则，
/// 确保领域层不依赖于具体的数据存储实现
pub mod keyword_repository;
pub mod rank_log_repository;

pub use keyword_repository::{KeywordRepository, RepositoryError};
pub use rank_log_repository::RankLogRepository;
