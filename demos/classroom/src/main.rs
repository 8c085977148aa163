//! # Classroom 演示应用
//!
//! 演示如何使用 Beanwire 从定义文档构建 bean 上下文并完成装配

use beanwire_context::BeanContext;
use clap::Parser;
use classroom::{Course, Student, Teacher};
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "classroom")]
#[command(about = "Beanwire classroom 演示应用")]
struct Args {
    /// 定义文件路径
    #[arg(short, long, default_value = "demos/classroom/config/classroom.toml")]
    config: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level))
        .init();

    info!("启动 classroom 演示应用");

    // 构建 bean 上下文
    let context = build_context(&args)?;

    // 演示配置填充的 bean
    demonstrate_student(&context)?;

    // 演示构造后装配
    demonstrate_teacher(&context)?;

    info!("演示结束");
    Ok(())
}

/// 构建 bean 上下文
fn build_context(args: &Args) -> anyhow::Result<BeanContext> {
    info!("构建 bean 上下文: {}", args.config);

    let builder = BeanContext::builder()
        .register_kind::<Course>("course")
        .register_kind::<Student>("student")
        .register_wired_kind::<Teacher>("teacher");

    let builder = if args.config.ends_with(".json") {
        builder.add_config_json(&args.config)?
    } else {
        builder.add_config_toml(&args.config)?
    };

    Ok(builder.build()?)
}

/// 演示由定义文档属性填充的学生 bean
fn demonstrate_student(context: &BeanContext) -> anyhow::Result<()> {
    let student = context.get_bean::<Student>("student")?;
    info!("学生: no={}, name={}", student.no(), student.name());
    Ok(())
}

/// 演示教师 bean 的构造后装配结果
fn demonstrate_teacher(context: &BeanContext) -> anyhow::Result<()> {
    let teacher = context.get_bean::<Teacher>("teacher")?;

    let names: Vec<&str> = teacher.courses().iter().map(|course| course.name()).collect();
    info!("教师装配到的课程: {:?}", names);

    // 不存在的名称在装配时被跳过
    info!("physics 是否注册: {}", context.contains_bean("physics"));

    Ok(())
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
