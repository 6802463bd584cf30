// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM的领域仓库接口实现
pub mod keyword_repo_impl;
pub mod rank_log_repo_impl;

pub use keyword_repo_impl::KeywordRepositoryImpl;
pub use rank_log_repo_impl::RankLogRepositoryImpl;
