// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 基于内存SQLite数据库和wiremock搜索提供商桩的端到端测试
mod helpers;

mod health_check;
mod keywords_test;
mod rank_check_test;
