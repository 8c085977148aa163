//! bean 上下文端到端集成测试
//!
//! 使用 classroom 演示域验证完整流程：解析定义文档、构造普通
//! bean、对消费者执行构造后装配。

use beanwire_common::{ConfigError, ContextError, RegistryError, WiringError};
use beanwire_context::{BeanContext, ContextBuilder};
use classroom::{Course, Student, Teacher};
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .try_init()
            .ok(); // 忽略初始化失败的错误
    });
}

/// 注册 classroom 域全部 kind 的构建器
fn classroom_builder() -> ContextBuilder {
    BeanContext::builder()
        .register_kind::<Course>("course")
        .register_kind::<Student>("student")
        .register_wired_kind::<Teacher>("teacher")
}

/// 把定义文档内容写入临时文件
fn write_temp(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), content).unwrap();
    file
}

/// 教师装配到的课程名称列表
fn wired_course_names(context: &BeanContext) -> Vec<String> {
    let teacher = context.get_bean::<Teacher>("teacher").unwrap();
    teacher
        .courses()
        .iter()
        .map(|course| course.name().to_string())
        .collect()
}

/// 测试只有 math 课程时的装配结果
#[test]
fn test_teacher_wired_with_single_course() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math"

[[bean]]
name = "teacher"
kind = "teacher"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    assert!(context.contains_bean("math"));
    assert!(context.contains_bean("teacher"));
    // physics 未声明，装配时被静默跳过
    assert!(!context.contains_bean("physics"));
    assert_eq!(wired_course_names(&context), vec!["math"]);

    let summary = context.summary();
    assert_eq!(summary.definitions, 2);
    assert_eq!(summary.beans_constructed, 2);
    assert_eq!(summary.consumers_wired, 1);
}

/// 测试注册表中没有任何课程时教师装配为空
#[test]
fn test_teacher_wired_with_no_courses() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "teacher"
kind = "teacher"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    let teacher = context.get_bean::<Teacher>("teacher").unwrap();
    assert!(teacher.courses().is_empty());
}

/// 测试课程列表顺序由固定检查顺序决定，与声明顺序无关
#[test]
fn test_lookup_order_independent_of_declaration() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "physics"
kind = "course"

[bean.properties]
name = "physics"

[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math"

[[bean]]
name = "teacher"
kind = "teacher"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    assert_eq!(wired_course_names(&context), vec!["math", "physics"]);
}

/// 测试教师声明在课程之前时装配结果不变
#[test]
fn test_teacher_declared_before_courses() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "teacher"
kind = "teacher"

[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    // 普通 bean 总是先于消费者构造，文档里的声明顺序不影响装配
    assert_eq!(wired_course_names(&context), vec!["math"]);
    assert_eq!(context.summary().consumers_wired, 1);
}

/// 测试学生 bean 由定义文档属性填充
#[test]
fn test_student_bound_from_configuration() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "student"
kind = "student"

[bean.properties]
no = 15
name = "Tom"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    let student = context.get_bean::<Student>("student").unwrap();
    assert_eq!(student.no(), 15);
    assert_eq!(student.name(), "Tom");
}

/// 测试 math 名下注册了错误类型时启动中止
#[test]
fn test_type_mismatch_aborts_startup() {
    init_test_logger();
    // math 名下声明的是 student kind，教师装配时类型必然不匹配
    let file = write_temp(
        r#"
[[bean]]
name = "math"
kind = "student"

[bean.properties]
no = 1
name = "Imposter"

[[bean]]
name = "teacher"
kind = "teacher"
"#,
    );

    let result = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build();

    match result {
        Err(ContextError::WiringError {
            source:
                WiringError::LookupFailed {
                    source: RegistryError::TypeMismatch { name, expected, actual },
                },
        }) => {
            assert_eq!(name, "math");
            assert!(expected.contains("Course"));
            assert!(actual.contains("Student"));
        }
        other => panic!("应返回类型不匹配错误, 实际: {other:?}"),
    }
}

/// 测试启动完成后按错误类型查找同样报类型不匹配
#[test]
fn test_get_bean_type_mismatch_after_startup() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "student"
kind = "student"

[bean.properties]
no = 15
name = "Tom"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    let result = context.get_bean::<Course>("student");
    assert!(matches!(
        result,
        Err(RegistryError::TypeMismatch { name, .. }) if name == "student"
    ));

    // 未注册名称的查找报 bean 未注册
    let result = context.get_bean::<Course>("ghost");
    assert!(matches!(
        result,
        Err(RegistryError::BeanNotFound { name }) if name == "ghost"
    ));
}

/// 测试 TOML 与 JSON 定义文档产生同样的装配结果
#[test]
fn test_json_and_toml_equivalent() {
    init_test_logger();
    let toml_file = write_temp(
        r#"
[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math"

[[bean]]
name = "student"
kind = "student"

[bean.properties]
no = 15
name = "Tom"

[[bean]]
name = "teacher"
kind = "teacher"
"#,
    );
    let json_file = write_temp(
        r#"
{
    "bean": [
        { "name": "math", "kind": "course", "properties": { "name": "math" } },
        { "name": "student", "kind": "student", "properties": { "no": 15, "name": "Tom" } },
        { "name": "teacher", "kind": "teacher" }
    ]
}
"#,
    );

    let from_toml = classroom_builder()
        .add_config_toml(toml_file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");
    let from_json = classroom_builder()
        .add_config_json(json_file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    assert_eq!(wired_course_names(&from_toml), wired_course_names(&from_json));
    assert_eq!(
        from_toml.get_bean::<Student>("student").unwrap().name(),
        from_json.get_bean::<Student>("student").unwrap().name()
    );
    assert_eq!(from_toml.summary().definitions, from_json.summary().definitions);
}

/// 测试后添加的来源覆盖先添加来源里的同名定义
#[test]
fn test_later_source_overrides_earlier() {
    init_test_logger();
    let base = write_temp(
        r#"
[[bean]]
name = "student"
kind = "student"

[bean.properties]
no = 1
name = "Alice"
"#,
    );
    let overlay = write_temp(
        r#"
[[bean]]
name = "student"
kind = "student"

[bean.properties]
no = 15
name = "Tom"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(base.path())
        .expect("添加定义文件应该成功")
        .add_config_toml(overlay.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    let student = context.get_bean::<Student>("student").unwrap();
    assert_eq!(student.no(), 15);
    assert_eq!(student.name(), "Tom");
    // 合并后只剩一条定义
    assert_eq!(context.summary().definitions, 1);
}

/// 测试未注册的 kind 导致启动失败
#[test]
fn test_unknown_kind_rejected() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "lab"
kind = "laboratory"
"#,
    );

    let result = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build();

    assert!(matches!(
        result,
        Err(ContextError::UnknownKind { name, kind }) if name == "lab" && kind == "laboratory"
    ));
}

/// 测试定义文件不存在时立即失败
#[test]
fn test_missing_config_file_error_handling() {
    init_test_logger();
    let error = classroom_builder()
        .add_config_toml("/nonexistent/classroom.toml")
        .err()
        .expect("缺失的定义文件应该报错");

    match error {
        ContextError::BootstrapFailed { message } => {
            assert!(message.contains("配置文件不存在"));
        }
        other => panic!("应返回启动失败错误, 实际: {other:?}"),
    }
}

/// 测试同一文档内重复的 bean 名称被拒绝
#[test]
fn test_duplicate_definition_rejected() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math"

[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math again"
"#,
    );

    let result = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build();

    assert!(matches!(
        result,
        Err(ContextError::ConfigError {
            source: ConfigError::DuplicateDefinition { name },
        }) if name == "math"
    ));
}

/// 测试上下文暴露的元数据视图
#[test]
fn test_context_metadata_view() {
    init_test_logger();
    let file = write_temp(
        r#"
[[bean]]
name = "math"
kind = "course"

[bean.properties]
name = "math"

[[bean]]
name = "teacher"
kind = "teacher"
"#,
    );

    let context = classroom_builder()
        .add_config_toml(file.path())
        .expect("添加定义文件应该成功")
        .build()
        .expect("上下文构建应该成功");

    let beans = context.beans();
    assert_eq!(beans.len(), 2);

    let math = beans.iter().find(|meta| meta.name == "math").unwrap();
    assert_eq!(math.kind, "course");
    assert_eq!(math.type_info.short_name(), "Course");

    let teacher = beans.iter().find(|meta| meta.name == "teacher").unwrap();
    assert_eq!(teacher.kind, "teacher");
    assert_eq!(teacher.type_info.short_name(), "Teacher");
}
