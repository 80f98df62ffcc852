//! Keyword tables for Db2 where they differ from standard SQL.

pub(crate) const DB2_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
AFTER
ALTER COLUMN
ALTER TABLE
DELETE FROM
EXCEPT
FETCH FIRST
FROM
GROUP BY
GO
HAVING
INSERT INTO
INSERT
LIMIT
ORDER BY
SELECT
SET CURRENT SCHEMA
SET SCHEMA
SET
UPDATE
VALUES
WHERE
";

pub(crate) const DB2_RESERVED_KEYWORDS: &str = "ALL
ALLOW
AS
ASC
ACTIVATE
BETWEEN
BY
CACHE
CARDINALITY
CASCADED
CAST
CHECK
CLONE
COLLECTION
COLUMN
CONCAT
CONSTRAINT
CREATE
CURRENT DATE
CURRENT TIME
CURRENT TIMESTAMP
CURRENT_DATE
CURRENT_TIME
CURRENT_TIMESTAMP
DATABASE
DEFAULT
DESC
DISABLE
DISTINCT
DROP
ENABLE
ENDING
ESCAPE
EXISTS
EXPLAIN
FOR
FOREIGN KEY
GENERATED
GRANT
GROUP
IDENTITY
IN
INDEX
INTO
IS
ISOBID
JAR
KEEP
KEY
LIKE
LOCKSIZE
MAINTAINED
MATERIALIZED
MICROSECONDS
NOT
NULL
NULLS
OFFSET
ON
ONLY
OPTIMIZE
ORDER
ORGANIZE
OVER
PADDED
PARTITION BY
PIECESIZE
PRIMARY KEY
REFERENCES
RENAME
RESTRICT
ROTATE
ROW
ROWS
SECQTY
SECURITY
SUMMARY
TABLE
THEN
TO
TRIGGER
UNIQUE
USING
VALIDPROC
VIEW
VOLATILE
WITH
WITHOUT
";
