/*
 * Responsibility
 * - HTTP に依存しないドメインロジック
 */
pub mod auth;
