// 日志初始化
//
// 基于 flexi_logger，异步写文件并按大小轮转；全局保存句柄，logger 存活到进程结束

use crate::config::LogConfig;
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use parking_lot::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = parking_lot::const_mutex(None);

/// 初始化日志系统
///
/// 全局 logger 在进程内只安装一次：重复调用时保留第一次的配置并直接返回 `Ok(())`。
/// 警告及以上级别同时输出到 stderr。
pub fn init(config: &LogConfig) -> Result<(), FlexiLoggerError> {
    let mut guard = LOGGER_HANDLE.lock();
    if guard.is_some() {
        return Ok(());
    }

    let handle = build_logger(config)?.start()?;

    *guard = Some(handle);
    drop(guard);

    log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    Ok(())
}

fn build_logger(config: &LogConfig) -> Result<Logger, FlexiLoggerError> {
    Ok(Logger::try_with_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .write_mode(WriteMode::Async)
        .append())
}

/// 刷新缓冲的日志
///
/// 在程序退出前调用。句柄保持安装，之后的日志仍正常写入。
pub fn flush() {
    if let Some(handle) = LOGGER_HANDLE.lock().as_ref() {
        handle.flush();
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE.lock().is_some()
}
