// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 封装客户端请求和响应的数据结构
pub mod keyword_request;
pub mod rank_check;
pub mod rank_log_response;
